//! Error handling for the admin client

use lingua_core::{ContentError, ValidationError};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not authenticated - please log in first")]
    NotAuthenticated,

    #[error("Invalid form: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid content: {0}")]
    Content(ContentError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ContentError> for ClientError {
    fn from(error: ContentError) -> Self {
        match error {
            ContentError::Invalid(e) => Self::Validation(e),
            other => Self::Content(other),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl ClientError {
    /// HTTP status of a backend rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
