//! Application Errors
//!
//! Every failure ends up as a toast, so variants carry display-ready text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Endpoint missing or malformed; no request is issued.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure, bad HTTP status or unreadable body.
    #[error("Connection failed: {0}")]
    Transport(String),

    /// Form input rejected before submission.
    #[error("{0}")]
    Invalid(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(format!("malformed JSON: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
