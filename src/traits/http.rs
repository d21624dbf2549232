//! The transport seam under the pool gateway.
//!
//! The gateway only ever issues JSON GETs, so the trait is a single method.
//! Status handling and decoding live in [`crate::gateway`]; a client reports
//! every status as a normal [`HttpResponse`] and fails only on transport.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// A GET that never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The response started but its body could not be read
    #[error("Failed to read response: {0}")]
    Body(String),
    #[error("Request failed: {0}")]
    Other(String),
}

/// Issues JSON GET requests.
///
/// ```ignore
/// let response = client.get_json("https://api.example.com/pool").await?;
/// if response.is_success() {
///     let pools: Vec<PoolRecord> = response.decode()?;
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<HttpResponse, HttpError>;
}
