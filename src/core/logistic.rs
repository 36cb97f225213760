//! Logistic regression classifier loaded from a JSON artifact.
//!
//! ```json
//! {
//!   "model_type": "logistic_regression",
//!   "format_version": 1,
//!   "feature_names": ["age", "sex", "cp", "trestbps", "chol", "fbs", "restecg",
//!                     "thalach", "exang", "oldpeak", "slope", "ca", "thal"],
//!   "coefficients": [0.01, 1.2, 0.8, 0.02, 0.004, -0.1, 0.3, -0.03, 0.9, 0.5, 0.4, 1.1, 0.7],
//!   "intercept": -1.5,
//!   "threshold": 0.5
//! }
//! ```

use crate::domain::model::{EncodedFeatures, RiskLabel, FEATURE_COUNT, FEATURE_NAMES};
use crate::domain::ports::Classifier;
use crate::utils::error::{Result, RiskError};
use serde::Deserialize;
use std::path::Path;

pub const MODEL_TYPE: &str = "logistic_regression";
pub const FORMAT_VERSION: u32 = 1;

fn default_threshold() -> f64 {
    0.5
}

/// On-disk shape of the model file.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    threshold: f64,
}

fn format_error(message: impl Into<String>) -> RiskError {
    RiskError::ModelFormatError {
        message: message.into(),
    }
}

impl LogisticModel {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64, threshold: f64) -> Result<Self> {
        if coefficients.iter().any(|w| !w.is_finite()) || !intercept.is_finite() {
            return Err(format_error("coefficients and intercept must be finite"));
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(format_error(format!(
                "threshold must lie strictly between 0 and 1, got {}",
                threshold
            )));
        }

        Ok(Self {
            coefficients,
            intercept,
            threshold,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(content)?;
        Self::try_from(artifact)
    }

    pub fn decision_function(&self, features: &EncodedFeatures) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.values())
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    pub fn probability(&self, features: &EncodedFeatures) -> f64 {
        1.0 / (1.0 + (-self.decision_function(features)).exp())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl TryFrom<ModelArtifact> for LogisticModel {
    type Error = RiskError;

    fn try_from(artifact: ModelArtifact) -> Result<Self> {
        if artifact.model_type != MODEL_TYPE {
            return Err(format_error(format!(
                "unsupported model type '{}', expected '{}'",
                artifact.model_type, MODEL_TYPE
            )));
        }
        if artifact.format_version != FORMAT_VERSION {
            return Err(format_error(format!(
                "unsupported format version {}, expected {}",
                artifact.format_version, FORMAT_VERSION
            )));
        }
        // A reordered artifact would load fine and silently mis-predict.
        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(format_error(format!(
                "feature names {:?} do not match expected order {:?}",
                artifact.feature_names, FEATURE_NAMES
            )));
        }

        let coefficients: [f64; FEATURE_COUNT] =
            artifact.coefficients.as_slice().try_into().map_err(|_| {
                format_error(format!(
                    "expected {} coefficients, found {}",
                    FEATURE_COUNT,
                    artifact.coefficients.len()
                ))
            })?;

        Self::new(coefficients, artifact.intercept, artifact.threshold)
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &EncodedFeatures) -> Result<RiskLabel> {
        if let Some(index) = features.values().iter().position(|x| !x.is_finite()) {
            return Err(RiskError::PredictionError {
                message: format!("feature '{}' is not finite", FEATURE_NAMES[index]),
            });
        }

        let probability = self.probability(features);
        if !probability.is_finite() {
            return Err(RiskError::PredictionError {
                message: "probability is not finite".to_string(),
            });
        }

        tracing::debug!(probability, threshold = self.threshold, "logistic prediction");

        Ok(if probability > self.threshold {
            RiskLabel::Risk
        } else {
            RiskLabel::NoRisk
        })
    }
}
