use std::io;
use thiserror::Error;

use crate::call::CallError;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The intent classifier never produces one of these: classification is a total
/// function. Errors come from configuration, catalog loading, input validation
/// and the call demo.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (e.g. reading a catalog file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., blank or oversized chat input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables,
    /// a catalog that breaks the intent table invariants).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors raised by the simulated call.
    #[error("Call error: {0}")]
    Call(#[from] CallError),

    /// A reply is still pending for the previous message.
    #[error("Assistant is still typing")]
    Busy,

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Call(e) => AppError::Call(e.clone()),
            AppError::Busy => AppError::Busy,
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
