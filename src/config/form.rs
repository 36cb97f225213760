//! Numeric field bounds of the input form and the clamping applied to them.

use crate::domain::model::RawInput;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub min: T,
    pub max: T,
    pub default: T,
}

impl NumericField<u32> {
    pub fn clamp(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            tracing::warn!(
                "{} = {} is outside [{}, {}], using {}",
                self.name,
                value,
                self.min,
                self.max,
                clamped
            );
        }
        clamped
    }
}

impl NumericField<f64> {
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            tracing::warn!("{} is not a number, using default {}", self.name, self.default);
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            tracing::warn!(
                "{} = {} is outside [{}, {}], using {}",
                self.name,
                value,
                self.min,
                self.max,
                clamped
            );
        }
        clamped
    }
}

pub const AGE: NumericField<u32> = NumericField {
    name: "age",
    label: "Age (in years)",
    min: 0,
    max: 120,
    default: 25,
};

pub const RESTING_BP: NumericField<u32> = NumericField {
    name: "resting_bp",
    label: "Resting Blood Pressure (mm Hg)",
    min: 0,
    max: 300,
    default: 120,
};

pub const CHOLESTEROL: NumericField<u32> = NumericField {
    name: "cholesterol",
    label: "Serum Cholesterol (mg/dl)",
    min: 0,
    max: 700,
    default: 200,
};

pub const MAX_HEART_RATE: NumericField<u32> = NumericField {
    name: "max_heart_rate",
    label: "Maximum Heart Rate Achieved",
    min: 60,
    max: 250,
    default: 140,
};

pub const ST_DEPRESSION: NumericField<f64> = NumericField {
    name: "st_depression",
    label: "Depression Induced by Exercise Relative to Rest",
    min: 0.0,
    max: 10.0,
    default: 1.0,
};

pub const VESSEL_COUNT: NumericField<u32> = NumericField {
    name: "vessel_count",
    label: "Number of Major Vessels Colored by Fluoroscopy",
    min: 0,
    max: 4,
    default: 1,
};

/// Pull every numeric field back into its form range.
pub fn clamp_to_form(input: RawInput) -> RawInput {
    RawInput {
        age: AGE.clamp(input.age),
        resting_bp: RESTING_BP.clamp(input.resting_bp),
        cholesterol: CHOLESTEROL.clamp(input.cholesterol),
        max_heart_rate: MAX_HEART_RATE.clamp(input.max_heart_rate),
        st_depression: ST_DEPRESSION.clamp(input.st_depression),
        vessel_count: VESSEL_COUNT.clamp(input.vessel_count),
        ..input
    }
}
