use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("person cannot be nil")]
    InvalidInput,

    #[error("invalid age: {age}")]
    InvalidAge { age: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    DateParseError { field: String, value: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Broad origin of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

/// How bad an error is; the binary derives its exit code from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl PersonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PersonError::InvalidInput | PersonError::InvalidAge { .. } => ErrorCategory::Domain,
            PersonError::TomlError(_)
            | PersonError::DateParseError { .. }
            | PersonError::ConfigValidationError { .. }
            | PersonError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PersonError::IoError(_) | PersonError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 驗證失敗只回報，不中斷流程
            ErrorCategory::Domain => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PersonError::InvalidInput => "No person was provided".to_string(),
            PersonError::InvalidAge { age } => {
                format!("The person's age ({}) must not be negative", age)
            }
            PersonError::IoError(e) => format!("Could not read input: {}", e),
            PersonError::SerializationError(e) => format!("Could not render output: {}", e),
            PersonError::TomlError(e) => format!("The person file is not valid TOML: {}", e),
            PersonError::DateParseError { field, value } => {
                format!("'{}' is not a valid date for {}", value, field)
            }
            PersonError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            PersonError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not accepted for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PersonError::InvalidInput => "Construct a person before processing it",
            PersonError::InvalidAge { .. } => "Pass a non-negative value with --age",
            PersonError::IoError(_) => "Check that the config file exists and is readable",
            PersonError::SerializationError(_) => "Retry with --format text",
            PersonError::TomlError(_) => {
                "Make sure the file has a [person] table with name, age and birthdate"
            }
            PersonError::DateParseError { .. } => "Use the YYYY-MM-DD format, e.g. 1990-01-01",
            PersonError::ConfigValidationError { .. }
            | PersonError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, PersonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_low_severity() {
        assert_eq!(PersonError::InvalidInput.severity(), ErrorSeverity::Low);
        assert_eq!(
            PersonError::InvalidAge { age: -1 }.category(),
            ErrorCategory::Domain
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PersonError::InvalidInput.to_string(), "person cannot be nil");
        assert_eq!(
            PersonError::InvalidAge { age: -5 }.to_string(),
            "invalid age: -5"
        );
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = PersonError::InvalidConfigValueError {
            field: "format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.severity() > ErrorSeverity::Low);
    }

    #[test]
    fn test_each_category_has_its_own_severity() {
        let io = PersonError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let date = PersonError::DateParseError {
            field: "birthdate".to_string(),
            value: "soon".to_string(),
        };

        assert_eq!(PersonError::InvalidAge { age: -1 }.severity(), ErrorSeverity::Low);
        assert_eq!(date.severity(), ErrorSeverity::High);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }
}
