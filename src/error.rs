//! Error handling for wordlist-forge


use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone)]
pub enum WordlistError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl WordlistError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Attach a path to an IO error that was converted without one
    pub fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            Self::Io { message, path: None } => Self::Io {
                message,
                path: Some(path.to_string_lossy().to_string()),
            },
            other => other,
        }
    }

    /// Whether the error was caused by bad user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Parse { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Word set files must be JSON objects of string lists", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for WordlistError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for WordlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<csv::Error> for WordlistError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::from(e),
            other => Self::internal(format!("CSV writer failed: {:?}", other)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordlistError>;



/// Helper macro for validation errors
#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::WordlistError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::validation(format!($fmt, $($arg)*))
    };
}
