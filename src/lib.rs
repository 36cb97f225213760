pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, FormArgs};

pub use app::batch::{BatchScorer, BatchSummary};
pub use config::cli::{ConsoleDisplay, DisplayFormat, PatientFile};
pub use config::toml_config::AppConfig;
pub use crate::core::{classifier::ClassifierHandle, engine::RiskEngine, logistic::LogisticModel};
pub use utils::error::{Result, RiskError};
