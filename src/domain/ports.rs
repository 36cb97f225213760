use crate::domain::model::{EncodedFeatures, RawInput, RiskLabel, Verdict};
use crate::utils::error::Result;

/// A fitted binary classifier over the canonical feature vector.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &EncodedFeatures) -> Result<RiskLabel>;
}

/// Where form values come from (command line flags, a patient file, ...).
pub trait InputSource {
    fn collect(&self) -> Result<RawInput>;
}

/// Where a verdict is shown.
pub trait VerdictSink {
    fn render(&mut self, verdict: &Verdict) -> Result<()>;
}
