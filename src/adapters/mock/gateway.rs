//! Scripted pool gateway for testing.
//!
//! Results are queued ahead of time and handed out in FIFO order, one per
//! call. When a queue runs dry the last queued result is repeated.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::error::GatewayError;
use crate::models::PoolRecord;
use crate::traits::PoolGateway;

type ListResult = Result<Vec<PoolRecord>, GatewayError>;
type PoolResult = Result<PoolRecord, GatewayError>;

#[derive(Debug, Default)]
struct Script {
    lists: VecDeque<ListResult>,
    last_list: Option<ListResult>,
    pools: HashMap<String, VecDeque<PoolResult>>,
    last_pool: HashMap<String, PoolResult>,
    list_calls: usize,
    pool_calls: Vec<String>,
}

/// A [`PoolGateway`] that replays queued results.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGateway {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `list_pools` call.
    pub fn push_list(&self, result: ListResult) -> &Self {
        self.script.lock().unwrap().lists.push_back(result);
        self
    }

    /// Queue the result of the next `get_pool(id)` call.
    pub fn push_pool(&self, id: &str, result: PoolResult) -> &Self {
        self.script
            .lock()
            .unwrap()
            .pools
            .entry(id.to_string())
            .or_default()
            .push_back(result);
        self
    }

    /// Number of `list_pools` calls made.
    pub fn list_calls(&self) -> usize {
        self.script.lock().unwrap().list_calls
    }

    /// Ids passed to `get_pool`, in call order.
    pub fn pool_calls(&self) -> Vec<String> {
        self.script.lock().unwrap().pool_calls.clone()
    }
}

#[async_trait]
impl PoolGateway for ScriptedGateway {
    async fn list_pools(&self) -> Result<Vec<PoolRecord>, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script.list_calls += 1;
        if let Some(result) = script.lists.pop_front() {
            script.last_list = Some(result.clone());
            return result;
        }
        script
            .last_list
            .clone()
            .unwrap_or_else(|| Err(GatewayError::new("No scripted pool list")))
    }

    async fn get_pool(&self, id: &str) -> Result<PoolRecord, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script.pool_calls.push(id.to_string());
        let next = script.pools.get_mut(id).and_then(|queue| queue.pop_front());
        if let Some(result) = next {
            script.last_pool.insert(id.to_string(), result.clone());
            return result;
        }
        script
            .last_pool
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(GatewayError::from_status(404)))
    }
}
