use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, KanaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KanaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KanaError::IoError(_) => ErrorCategory::Io,
            KanaError::EncodingError(_)
            | KanaError::CsvError(_)
            | KanaError::SerializationError(_)
            | KanaError::ProcessingError { .. } => ErrorCategory::Data,
            KanaError::ConfigValidationError { .. }
            | KanaError::InvalidConfigValueError { .. }
            | KanaError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// 根據錯誤類型給出處理建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KanaError::IoError(_) => {
                "Check that the input files are readable and the output directory is writable"
            }
            KanaError::EncodingError(_) => "Re-save the input file as UTF-8",
            KanaError::CsvError(_) => "Check that converted files use 'label reading' lines",
            KanaError::SerializationError(_) => "Check the export path and the converted data",
            KanaError::ConfigValidationError { .. } => "Fix the TOML syntax in the configuration file",
            KanaError::InvalidConfigValueError { .. } => {
                "Correct the reported configuration value and run again"
            }
            KanaError::MissingConfigError { .. } => "Add the missing field to the configuration",
            KanaError::ProcessingError { .. } => "Inspect the input data for unexpected content",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KanaError::IoError(e) => format!("File access failed: {}", e),
            KanaError::EncodingError(_) => "Input file is not valid UTF-8".to_string(),
            KanaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            KanaError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            other => other.to_string(),
        }
    }

    /// 對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_critical() {
        let err = KanaError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = KanaError::MissingConfigError {
            field: "batch.files".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("batch.files"));
    }
}
