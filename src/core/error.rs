use std::time::Duration;
use thiserror::Error;

/// Message used when a remote rejection carries no text of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Failure reported by a [`RemoteDataService`](crate::remote::RemoteDataService).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The service refused the request (validation, policy, constraint).
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),

    #[error("remote call timed out after {0:?}")]
    Timeout(Duration),

    #[error("unsupported remote operation: {0}")]
    Unsupported(&'static str),

    /// Rejection without any usable message.
    #[error("An error occurred")]
    Unknown,
}

impl RemoteError {
    /// Human-readable message stored in the store's `error` field.
    ///
    /// Falls back to [`GENERIC_ERROR_MESSAGE`] when the rejection is blank.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Draft or patch payload rejected before any optimistic change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
