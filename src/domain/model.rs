use crate::domain::categories::{
    ChestPain, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope, Thalassemia,
};
use crate::utils::error::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 13;

/// Canonical feature order. The classifier was fitted on exactly this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// One set of form values.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInput {
    pub age: u32,
    pub sex: Sex,
    pub chest_pain: ChestPain,
    pub resting_bp: u32,
    pub cholesterol: u32,
    pub fasting_blood_sugar: FastingBloodSugar,
    pub resting_ecg: RestingEcg,
    pub max_heart_rate: u32,
    pub exercise_angina: ExerciseAngina,
    pub st_depression: f64,
    pub slope: StSlope,
    pub vessel_count: u32,
    pub thalassemia: Thalassemia,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            age: 25,
            sex: Sex::default(),
            chest_pain: ChestPain::default(),
            resting_bp: 120,
            cholesterol: 200,
            fasting_blood_sugar: FastingBloodSugar::default(),
            resting_ecg: RestingEcg::default(),
            max_heart_rate: 140,
            exercise_angina: ExerciseAngina::default(),
            st_depression: 1.0,
            slope: StSlope::default(),
            vessel_count: 1,
            thalassemia: Thalassemia::default(),
        }
    }
}

/// Form values as they arrive from a patient file or CSV row.
///
/// Categorical fields stay strings here so that labels are checked by the
/// enums' `FromStr`, which reports the field and the accepted labels.
/// Missing fields take the form defaults. Dataset column names are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    pub age: Option<u32>,
    pub sex: Option<String>,
    #[serde(alias = "cp")]
    pub chest_pain: Option<String>,
    #[serde(alias = "trestbps")]
    pub resting_bp: Option<u32>,
    #[serde(alias = "chol")]
    pub cholesterol: Option<u32>,
    #[serde(alias = "fbs")]
    pub fasting_blood_sugar: Option<String>,
    #[serde(alias = "restecg")]
    pub resting_ecg: Option<String>,
    #[serde(alias = "thalach")]
    pub max_heart_rate: Option<u32>,
    #[serde(alias = "exang")]
    pub exercise_angina: Option<String>,
    #[serde(alias = "oldpeak")]
    pub st_depression: Option<f64>,
    pub slope: Option<String>,
    #[serde(alias = "ca")]
    pub vessel_count: Option<u32>,
    #[serde(alias = "thal")]
    pub thalassemia: Option<String>,
}

fn label_or<T: FromStr<Err = RiskError>>(label: Option<&str>, default: T) -> Result<T> {
    label.map_or(Ok(default), str::parse)
}

impl TryFrom<PatientRecord> for RawInput {
    type Error = RiskError;

    fn try_from(record: PatientRecord) -> Result<Self> {
        let defaults = RawInput::default();
        Ok(RawInput {
            age: record.age.unwrap_or(defaults.age),
            sex: label_or(record.sex.as_deref(), defaults.sex)?,
            chest_pain: label_or(record.chest_pain.as_deref(), defaults.chest_pain)?,
            resting_bp: record.resting_bp.unwrap_or(defaults.resting_bp),
            cholesterol: record.cholesterol.unwrap_or(defaults.cholesterol),
            fasting_blood_sugar: label_or(
                record.fasting_blood_sugar.as_deref(),
                defaults.fasting_blood_sugar,
            )?,
            resting_ecg: label_or(record.resting_ecg.as_deref(), defaults.resting_ecg)?,
            max_heart_rate: record.max_heart_rate.unwrap_or(defaults.max_heart_rate),
            exercise_angina: label_or(record.exercise_angina.as_deref(), defaults.exercise_angina)?,
            st_depression: record.st_depression.unwrap_or(defaults.st_depression),
            slope: label_or(record.slope.as_deref(), defaults.slope)?,
            vessel_count: record.vessel_count.unwrap_or(defaults.vessel_count),
            thalassemia: label_or(record.thalassemia.as_deref(), defaults.thalassemia)?,
        })
    }
}

/// Feature vector in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedFeatures(pub [f64; FEATURE_COUNT]);

impl EncodedFeatures {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|feature| *feature == name)
            .map(|index| self.0[index])
    }
}

/// Binary class produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    NoRisk,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    NoRisk,
    Risk,
}

/// What the model step contributed to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelOutcome {
    Predicted(RiskLabel),
    /// No classifier loaded. Rendered with the no-risk text.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "outcome", rename_all = "snake_case")]
pub enum Statement {
    Cholesterol(RuleOutcome),
    HeartRate(RuleOutcome),
    Model(ModelOutcome),
}

impl Statement {
    pub fn message(&self) -> &'static str {
        match self {
            Statement::Cholesterol(RuleOutcome::NoRisk) => {
                "Cholesterol is in the safe range: No Heart Attack Risk."
            }
            Statement::Cholesterol(RuleOutcome::Risk) => {
                "Cholesterol is high: Risk of heart attack."
            }
            Statement::HeartRate(RuleOutcome::NoRisk) => {
                "Heart rate is safe for your age: No Heart Attack Risk."
            }
            Statement::HeartRate(RuleOutcome::Risk) => "Heart rate is high: Risk of heart attack.",
            Statement::Model(ModelOutcome::Predicted(RiskLabel::Risk)) => {
                "The model predicts: Heart Attack Risk (1 = Risk of heart attack)."
            }
            Statement::Model(ModelOutcome::Predicted(RiskLabel::NoRisk))
            | Statement::Model(ModelOutcome::Unavailable) => {
                "The model predicts: No Heart Attack Risk (0 = No risk)."
            }
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Ordered statements produced by one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    statements: Vec<Statement>,
}

impl Verdict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.statements.iter().map(Statement::message).collect()
    }

    pub fn model_outcome(&self) -> Option<ModelOutcome> {
        self.statements.iter().find_map(|statement| match statement {
            Statement::Model(outcome) => Some(*outcome),
            _ => None,
        })
    }
}
