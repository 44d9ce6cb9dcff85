//! Centralized error types for MemberDash.
//!
//! The error surface here is intentionally small: store lookups can miss,
//! configuration can fail to load or parse, and the terminal can misbehave.
//! All error types use `thiserror` for ergonomic handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Record store errors.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// IO errors (file system, terminal backend).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read the settings file. Check that it exists and is readable."
                        .to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save settings. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Settings file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save settings. Internal error.".to_string()
                }
                ConfigError::UnknownTheme(name) => {
                    format!("Unknown theme '{}'; using the default instead.", name)
                }
            },
            AppError::Store(StoreError::NotFound(id)) => {
                format!("Member #{} was not found. It may have been a stale edit.", id)
            }
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Check if this error is critical.
    ///
    /// Critical errors end the session; everything else surfaces as a
    /// toast notification.
    pub fn is_critical(&self) -> bool {
        matches!(self, AppError::Terminal(_) | AppError::Io(_))
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_store_error() {
        let err: AppError = StoreError::NotFound(7).into();
        assert!(matches!(err, AppError::Store(StoreError::NotFound(7))));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_not_found_user_message_names_the_id() {
        let err = AppError::Store(StoreError::NotFound(42));
        assert!(err.user_message().contains("42"));
    }

    #[test]
    fn test_unknown_theme_message_names_the_theme() {
        let err = AppError::Config(ConfigError::UnknownTheme("lava".to_string()));
        assert!(err.user_message().contains("lava"));
    }

    #[test]
    fn test_not_found_is_not_critical() {
        let err = AppError::Store(StoreError::NotFound(1));
        assert!(!err.is_critical());
    }

    #[test]
    fn test_terminal_error_is_critical() {
        let err = AppError::terminal("backend gone");
        assert!(err.is_critical());
        assert_eq!(err.user_message(), "Terminal error: backend gone");
    }

    #[test]
    fn test_other_error() {
        let err = AppError::other("something went wrong");
        assert!(matches!(err, AppError::Other(_)));
        assert_eq!(err.user_message(), "something went wrong");
    }
}
