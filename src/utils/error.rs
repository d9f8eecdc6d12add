use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Missing argument: {name} must be provided")]
    MissingArgument { name: String },

    #[error("Rule index {index} is out of range (rule set holds {len} rules)")]
    RuleIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlightError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. }
            | Self::MissingArgument { .. }
            | Self::RuleIndexOutOfRange { .. } => ErrorCategory::Input,
            Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Output,
        }
    }

    /// 所有錯誤都是呼叫端的程式錯誤，沒有可重試的暫時性錯誤
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfigValue { .. }
            | Self::InvalidArgument { .. }
            | Self::MissingArgument { .. }
            | Self::RuleIndexOutOfRange { .. } => ErrorSeverity::High,
            Self::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => format!("Invalid input: {}", message),
            Self::MissingArgument { name } => format!("Required input '{}' was not supplied", name),
            Self::RuleIndexOutOfRange { index, len } => format!(
                "There is no rule at position {} (only {} rules are available)",
                index, len
            ),
            Self::InvalidConfigValue { field, value, .. } => {
                format!("Option '{}' has an invalid value '{}'", field, value)
            }
            Self::Serialization(_) => "Failed to render the flight report".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidArgument { .. } => {
                "Pass an even number of timestamps (departure/arrival pairs)".to_string()
            }
            Self::MissingArgument { .. } => {
                "Supply both the flights and the rules to filter with".to_string()
            }
            Self::RuleIndexOutOfRange { len, .. } => {
                format!("Pick a rule number between 1 and {}", len)
            }
            Self::InvalidConfigValue { reason, .. } => reason.clone(),
            Self::Serialization(_) => "Retry without --json to use the plain text report".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FlightError::RuleIndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Rule index 5 is out of range (rule set holds 3 rules)"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.recovery_suggestion().contains("between 1 and 3"));

        let err = FlightError::missing_argument("flights");
        assert_eq!(err.to_string(), "Missing argument: flights must be provided");
    }

    #[test]
    fn test_config_error_category() {
        let err = FlightError::InvalidConfigValue {
            field: "rules".to_string(),
            value: "7".to_string(),
            reason: "Value must be between 1 and 3".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.recovery_suggestion(), "Value must be between 1 and 3");
    }
}
