use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown {field} '{value}' (expected one of: {expected})")]
    UnknownCategory {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Model artifact error: {message}")]
    ModelFormatError { message: String },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Model,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 輸入錯誤
            ErrorSeverity::High => 1,     // 配置或模型錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl RiskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RiskError::IoError(_) => ErrorCategory::Io,
            RiskError::TomlError(_)
            | RiskError::ConfigError { .. }
            | RiskError::ConfigValidationError { .. }
            | RiskError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RiskError::SerializationError(_)
            | RiskError::CsvError(_)
            | RiskError::UnknownCategory { .. } => ErrorCategory::Input,
            RiskError::ModelFormatError { .. } | RiskError::PredictionError { .. } => {
                ErrorCategory::Model
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RiskError::PredictionError { .. } => ErrorSeverity::Low,
            RiskError::CsvError(_) | RiskError::UnknownCategory { .. } => ErrorSeverity::Medium,
            RiskError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RiskError::IoError(e) => format!("Could not read or write a file: {}", e),
            RiskError::UnknownCategory { field, value, .. } => {
                format!("'{}' is not a valid choice for {}", value, field)
            }
            RiskError::CsvError(e) => format!("The patient CSV could not be read: {}", e),
            RiskError::ModelFormatError { .. } => {
                "The model file is not a usable classifier".to_string()
            }
            RiskError::PredictionError { .. } => {
                "The model could not produce a prediction".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the configuration file and command line flags".to_string()
            }
            ErrorCategory::Input => match self {
                RiskError::UnknownCategory { expected, .. } => {
                    format!("Use one of the listed labels exactly: {}", expected)
                }
                _ => "Check that every patient field uses the expected name and format"
                    .to_string(),
            },
            ErrorCategory::Model => {
                "Re-export the model artifact with the 13 features in canonical order".to_string()
            }
            ErrorCategory::Io => "Make sure the path exists and is readable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
