//! Pool gateway trait abstraction.
//!
//! The store and the CLI only talk to the remote pool API through
//! [`PoolGateway`], so tests can substitute a scripted implementation.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::PoolRecord;

/// Remote source of pool records.
#[async_trait]
pub trait PoolGateway: Send + Sync {
    /// Fetch every pool, in the order the remote API returns them.
    async fn list_pools(&self) -> Result<Vec<PoolRecord>, GatewayError>;

    /// Fetch the full record of one pool.
    async fn get_pool(&self, id: &str) -> Result<PoolRecord, GatewayError>;
}
