use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SynochatError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Settings store errors
    SettingsError {
        key: String,
        operation: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Multiple errors (for concurrent writes)
    MultipleErrors {
        errors: Vec<SynochatError>,
        context: String,
    },
}

impl SynochatError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn settings_error(key: &str, operation: &str, reason: &str) -> Self {
        Self::SettingsError {
            key: key.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    /// Collapses a batch of failures: one error stays as is, more become `MultipleErrors`.
    pub fn from_batch(mut errors: Vec<SynochatError>, context: &str) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::MultipleErrors {
                errors,
                context: context.to_string(),
            }),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::SettingsError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(|e| e.is_recoverable()),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::SettingsError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(|e| e.severity())
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::SettingsError { key, operation, reason } => {
                format!("Setting '{}' could not be {}: {}", key, operation, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for SynochatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SynochatError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type SynochatResult<T> = Result<T, SynochatError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Logs the technical details and prints the user-facing message to stderr.
    pub fn handle_error(error: &SynochatError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for SynochatError {
    fn from(error: std::io::Error) -> Self {
        SynochatError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SynochatError {
    fn from(error: reqwest::Error) -> Self {
        SynochatError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_one_is_unwrapped() {
        let error = SynochatError::settings_error("k", "written", "boom");
        let collapsed = SynochatError::from_batch(vec![error.clone()], "save").unwrap();
        assert_eq!(collapsed, error);
    }

    #[test]
    fn batch_of_many_keeps_highest_severity() {
        let errors = vec![
            SynochatError::validation_error("webhook", "", "non-empty", None),
            SynochatError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "disk")),
        ];
        let collapsed = SynochatError::from_batch(errors, "save").unwrap();
        assert_eq!(collapsed.severity(), ErrorSeverity::Critical);
        assert!(collapsed.is_recoverable());
        assert!(collapsed.user_message().starts_with("Multiple errors occurred during save"));
    }

    #[test]
    fn io_failure_is_a_critical_system_error() {
        let error = SynochatError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(error, SynochatError::SystemError { ref reason, .. } if reason == "denied"));
        assert!(!error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn empty_batch_is_no_error() {
        assert!(SynochatError::from_batch(Vec::new(), "save").is_none());
    }
}
