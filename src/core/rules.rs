//! Threshold checks that run alongside the classifier.
//!
//! Both rules use a strict `<` for the safe side, so a value sitting exactly
//! on the threshold counts as risk.

use crate::domain::model::RuleOutcome;

/// Cholesterol (mg/dl) at or above this level is flagged.
pub const CHOLESTEROL_LIMIT: u32 = 200;

/// Fraction of the age-predicted maximum heart rate used as the target.
pub const TARGET_HEART_RATE_FRACTION: f64 = 0.5;

const AGE_PREDICTED_MAX_BASE: f64 = 220.0;

pub fn cholesterol_rule(cholesterol: u32) -> RuleOutcome {
    if cholesterol < CHOLESTEROL_LIMIT {
        RuleOutcome::NoRisk
    } else {
        RuleOutcome::Risk
    }
}

/// `(220 - age) * 0.5`
pub fn target_heart_rate(age: u32) -> f64 {
    (AGE_PREDICTED_MAX_BASE - f64::from(age)) * TARGET_HEART_RATE_FRACTION
}

pub fn heart_rate_rule(age: u32, max_heart_rate: u32) -> RuleOutcome {
    let target = target_heart_rate(age);
    tracing::debug!(age, max_heart_rate, target, "heart rate target");

    if f64::from(max_heart_rate) < target {
        RuleOutcome::NoRisk
    } else {
        RuleOutcome::Risk
    }
}
