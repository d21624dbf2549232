//! The single error kind produced by the pool gateway.
//!
//! Transport failures, non-success HTTP statuses, and malformed payloads all
//! collapse into [`GatewayError`]. Only a human-readable message is carried.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        Self::new(format!("Error! Status: {}", status))
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid pool data: {}", err))
    }
}
