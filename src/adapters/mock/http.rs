//! In-memory [`HttpClient`] for gateway tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, HttpResponse};

/// What the mock answers for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(HttpResponse),
    Fail(HttpError),
}

impl MockResponse {
    /// `200` with `value` encoded as the body.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => MockResponse::Reply(HttpResponse::new(200, body)),
            Err(e) => MockResponse::Fail(HttpError::Other(e.to_string())),
        }
    }

    /// The given status with an empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Reply(HttpResponse::new(status, ""))
    }

    /// A raw body under `200`.
    pub fn text(body: &'static str) -> Self {
        MockResponse::Reply(HttpResponse::new(200, body))
    }
}

#[derive(Debug, Default)]
struct Routes {
    by_url: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    requested: Vec<String>,
}

/// Answers GETs from a URL table and records every URL asked for.
///
/// A URL with no route gets the fallback, or a connect error if none is set.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, url: &str, response: MockResponse) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .by_url
            .insert(url.to_string(), response);
        self
    }

    pub fn fallback(&self, response: MockResponse) -> &Self {
        self.routes.lock().unwrap().fallback = Some(response);
        self
    }

    /// URLs requested so far, oldest first.
    pub fn requested_urls(&self) -> Vec<String> {
        self.routes.lock().unwrap().requested.clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_json(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let mut routes = self.routes.lock().unwrap();
        routes.requested.push(url.to_string());
        let response = routes
            .by_url
            .get(url)
            .or(routes.fallback.as_ref())
            .cloned();

        match response {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(HttpError::Connect(format!("no route for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_route_beats_fallback() {
        let client = MockHttpClient::new();
        client
            .route("https://api.test/pool", MockResponse::status(204))
            .fallback(MockResponse::status(500));

        let hit = client.get_json("https://api.test/pool").await.unwrap();
        let miss = client.get_json("https://api.test/pool/1").await.unwrap();

        assert_eq!(hit.status, 204);
        assert_eq!(miss.status, 500);
        assert_eq!(
            client.requested_urls(),
            vec!["https://api.test/pool", "https://api.test/pool/1"]
        );
    }

    #[tokio::test]
    async fn test_unrouted_is_connect_error() {
        let client = MockHttpClient::new();
        let err = client.get_json("https://nowhere").await.unwrap_err();
        assert!(matches!(err, HttpError::Connect(_)));
    }
}
