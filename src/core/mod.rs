pub mod classifier;
pub mod encoding;
pub mod engine;
pub mod features;
pub mod logistic;
pub mod rules;

pub use crate::domain::model::{EncodedFeatures, RawInput, RiskLabel, Statement, Verdict};
pub use crate::domain::ports::{Classifier, InputSource, VerdictSink};
pub use crate::utils::error::Result;
