//! Defines the error types for loading threshold tables.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("Threshold table I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Threshold table parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid threshold table: {msg}")]
    Invalid { msg: String },
}

impl ThresholdError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid { msg: msg.into() }
    }
}
