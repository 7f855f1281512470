//! Error type shared by both page controllers.
//!
//! Variants follow how the failure is surfaced: validation and empty results
//! are warnings, transport problems are danger toasts or inline messages,
//! client-side rendering failures are danger toasts that leave the rendered
//! data alone.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Required input missing, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Request succeeded but returned no rows
    #[error("no rows returned")]
    EmptyResult,

    /// Non-2xx answer; `message` is the server-provided text when there was one
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },

    #[error("request failed: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Payslip requested for a record without a pay period
    #[error("period information missing")]
    MissingPeriod,

    #[error("render failed: {0}")]
    Render(String),

    #[error("download failed: {0}")]
    Download(String),
}

impl AppError {
    /// Text shown to the user, falling back to `generic` when the error
    /// carries nothing better
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Http {
                message: Some(msg), ..
            } => msg.clone(),
            _ => generic.to_string(),
        }
    }
}
