//! HTTP implementation of the pool gateway.
//!
//! Talks to the mining-pool mock API:
//!
//! - `GET {base}/pool` - list of pools
//! - `GET {base}/pool/{id}` - one pool
//!
//! Every failure (transport, non-2xx status, undecodable body) is reported as
//! a [`GatewayError`].

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::config::Config;
use crate::error::GatewayError;
use crate::models::PoolRecord;
use crate::traits::{HttpClient, HttpResponse, PoolGateway};

/// Default base URL of the remote mining-pool API.
pub const DEFAULT_API_BASE_URL: &str =
    "https://6872860b76a5723aacd505be.mockapi.io/api/mining-pools";

/// [`PoolGateway`] backed by an [`HttpClient`].
pub struct HttpPoolGateway<C: HttpClient> {
    base_url: String,
    client: C,
}

impl HttpPoolGateway<ReqwestHttpClient> {
    /// Build the production gateway described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let client = match config.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout),
            None => ReqwestHttpClient::new(),
        };
        Self::new(config.api_base_url.clone(), client)
    }
}

impl<C: HttpClient> HttpPoolGateway<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the pool list resource.
    pub fn list_url(&self) -> String {
        format!("{}/pool", self.base_url)
    }

    /// URL of one pool resource. The id is percent-encoded as a path segment.
    pub fn pool_url(&self, id: &str) -> Result<String, GatewayError> {
        let mut url = reqwest::Url::parse(&self.list_url())
            .map_err(|e| GatewayError::new(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::new("Invalid API URL: cannot be a base"))?
            .push(id);
        Ok(url.to_string())
    }

    async fn fetch(&self, url: &str) -> Result<HttpResponse, GatewayError> {
        debug!("GET {}", url);
        let response = self.client.get_json(url).await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            GatewayError::from(e)
        })?;

        if !response.is_success() {
            warn!("Request to {} returned status {}", url, response.status);
            return Err(GatewayError::from_status(response.status));
        }

        Ok(response)
    }
}

#[async_trait]
impl<C: HttpClient> PoolGateway for HttpPoolGateway<C> {
    async fn list_pools(&self) -> Result<Vec<PoolRecord>, GatewayError> {
        let response = self.fetch(&self.list_url()).await?;
        let pools: Vec<PoolRecord> = response.decode()?;
        debug!("Received {} pools", pools.len());
        Ok(pools)
    }

    async fn get_pool(&self, id: &str) -> Result<PoolRecord, GatewayError> {
        let url = self.pool_url(id)?;
        let response = self.fetch(&url).await?;
        Ok(response.decode()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    const BASE: &str = "https://api.test/mining-pools";

    fn pool_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": format!("Pool {}", id),
            "hashrateTHs": 100.0,
            "activeWorkers": 10,
            "rejectRate": 0.01,
            "status": status,
            "last24hRevenueBTC": 0.5,
            "uptimePercent": 99.9,
            "location": "Oslo",
            "feePercent": 2.0
        })
    }

    #[test]
    fn test_urls() {
        let gateway = HttpPoolGateway::new(format!("{}/", BASE), MockHttpClient::new());
        assert_eq!(gateway.base_url(), BASE);
        assert_eq!(gateway.list_url(), format!("{}/pool", BASE));
        assert_eq!(gateway.pool_url("42").unwrap(), format!("{}/pool/42", BASE));
        assert_eq!(
            gateway.pool_url("a b").unwrap(),
            format!("{}/pool/a%20b", BASE)
        );
    }

    #[tokio::test]
    async fn test_list_pools_success() {
        let client = MockHttpClient::new();
        client.route(
            &format!("{}/pool", BASE),
            MockResponse::json(&serde_json::json!([pool_json("1", "online"), pool_json("2", "offline")])),
        );
        let gateway = HttpPoolGateway::new(BASE, client.clone());

        let pools = gateway.list_pools().await.unwrap();
        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0].id, "1");
        assert_eq!(pools[1].id, "2");
        assert_eq!(client.requested_urls().len(), 1);
    }

    #[tokio::test]
    async fn test_status_error_message() {
        let client = MockHttpClient::new();
        client.fallback(MockResponse::status(500));
        let gateway = HttpPoolGateway::new(BASE, client);

        let err = gateway.list_pools().await.unwrap_err();
        assert_eq!(err.message(), "Error! Status: 500");
    }

    #[tokio::test]
    async fn test_transport_error() {
        let client = MockHttpClient::new();
        client.fallback(MockResponse::Fail(HttpError::Connect("refused".to_string())));
        let gateway = HttpPoolGateway::new(BASE, client);

        let err = gateway.get_pool("1").await.unwrap_err();
        assert_eq!(err.message(), "Connection failed: refused");
    }

    #[tokio::test]
    async fn test_unknown_status_value_is_gateway_error() {
        let client = MockHttpClient::new();
        client.fallback(MockResponse::json(&pool_json("3", "retired")));
        let gateway = HttpPoolGateway::new(BASE, client);

        let err = gateway.get_pool("3").await.unwrap_err();
        assert!(err.message().starts_with("Invalid pool data"));
    }

    #[tokio::test]
    async fn test_get_pool_hits_id_url() {
        let client = MockHttpClient::new();
        client.fallback(MockResponse::json(&pool_json("42", "online")));
        let gateway = HttpPoolGateway::new(BASE, client.clone());

        let pool = gateway.get_pool("42").await.unwrap();
        assert_eq!(pool.id, "42");
        assert_eq!(client.requested_urls(), vec![format!("{}/pool/42", BASE)]);
    }
}
