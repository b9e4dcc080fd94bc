use thiserror::Error;

/// Unified error type used across the crate
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Tags API error: {0}")]
    TagsApi(#[from] crate::tags_client::TagsClientError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Build a field-scoped validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Error categories, used to decide how a failure surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input problem, fixable by the user
    UserError,
    /// Transient system problem, safe to retry manually
    SystemError,
    /// Startup configuration problem, requires a settings change
    ConfigError,
    /// Unrecoverable problem
    FatalError,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation { .. } => ErrorCategory::UserError,
            AppError::UrlParse(_) => ErrorCategory::UserError,
            AppError::Configuration(_) => ErrorCategory::ConfigError,
            AppError::Network(_) => ErrorCategory::SystemError,
            AppError::TagsApi(_) => ErrorCategory::SystemError,
            AppError::Internal(_) => ErrorCategory::SystemError,
            AppError::Serialization(_) => ErrorCategory::FatalError,
        }
    }

    /// Text shown to the user in a transient notice
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "A network error occurred. Check your connection and try again.".to_string()
            }
            AppError::TagsApi(err) => err.user_message(),
            AppError::UrlParse(_) => "The configured API URL is not a valid URL.".to_string(),
            AppError::Validation { field, message } => format!("{field}: {message}"),
            AppError::Configuration(msg) => format!("Configuration error: {msg}"),
            AppError::Serialization(_) => "Failed to convert API data.".to_string(),
            AppError::Internal(err) => format!("An internal error occurred: {err}"),
        }
    }

    /// Whether a manual retry (resubmit, refilter) can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::SystemError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_user_errors() {
        let err = AppError::validation("title", "Name must be at least 3 characters");
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert!(!err.is_retryable());
        assert_eq!(
            err.user_message(),
            "title: Name must be at least 3 characters"
        );
    }

    #[test]
    fn test_configuration_errors_are_config_errors() {
        let err = AppError::config("TAGS_API_URL is not set");
        assert_eq!(err.category(), ErrorCategory::ConfigError);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_api_errors_are_retryable() {
        let err = AppError::TagsApi(crate::tags_client::TagsClientError::Http { status: 500 });
        assert_eq!(err.category(), ErrorCategory::SystemError);
        assert!(err.is_retryable());
    }
}
