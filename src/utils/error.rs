use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpDeskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Terminal,
    Output,
}

impl HelpDeskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelpDeskError::IoError(_) => ErrorCategory::Terminal,
            HelpDeskError::SerializationError(_) => ErrorCategory::Output,
            HelpDeskError::TomlError(_)
            | HelpDeskError::PatternError(_)
            | HelpDeskError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelpDeskError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            HelpDeskError::SerializationError(e) => format!("Could not render a report: {}", e),
            HelpDeskError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            HelpDeskError::PatternError(e) => format!("Could not expand environment variables: {}", e),
            HelpDeskError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the config file and command-line flags",
            ErrorCategory::Terminal => "Make sure stdin and stdout are available",
            ErrorCategory::Output => "Try again with --format text",
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Terminal => 1,
            ErrorCategory::Output => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, HelpDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_share_category() {
        let malformed: HelpDeskError = toml::from_str::<toml::Table>("[center")
            .unwrap_err()
            .into();
        let invalid = HelpDeskError::InvalidConfigValueError {
            field: "center.frequent_threshold".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };

        assert_eq!(malformed.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.exit_code(), 2);
        assert!(invalid.user_friendly_message().contains("center.frequent_threshold"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: HelpDeskError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.category(), ErrorCategory::Terminal);
        assert_eq!(err.exit_code(), 1);
    }
}
