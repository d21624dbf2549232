//! Production [`HttpClient`] over reqwest.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, HttpResponse};

/// reqwest-backed client with an optional per-request timeout.
///
/// ```ignore
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(10));
/// let response = client.get_json("https://api.example.com/pool").await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestHttpClient {
    /// A client that waits as long as the server takes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            let after = self
                .timeout
                .map(|t| format!("no response after {:?}", t))
                .unwrap_or_else(|| err.to_string());
            HttpError::Timeout(after)
        } else if err.is_connect() {
            HttpError::Connect(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        Ok(HttpResponse::new(status, body))
    }
}
