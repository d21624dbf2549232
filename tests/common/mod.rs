//! Common test utilities for integration tests.
//!
//! Fixtures for pool records, their wire JSON, and ready-made apps.
//!
//! # Example
//!
//! ```ignore
//! let gateway = ScriptedGateway::default();
//! gateway.push_list(Ok(sample_pools()));
//! let app = test_app(gateway);
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use poolwatch::adapters::ScriptedGateway;
use poolwatch::app::App;
use poolwatch::config::Config;
use poolwatch::models::{PoolRecord, PoolStatus};

/// A pool record with the given identity and otherwise fixed values.
pub fn pool(id: &str, name: &str, status: PoolStatus) -> PoolRecord {
    PoolRecord {
        id: id.to_string(),
        name: name.to_string(),
        hashrate_ths: 100.0,
        active_workers: 50,
        reject_rate: 0.01,
        status,
        last_24h_revenue_btc: 0.25,
        uptime_percent: 99.5,
        location: "Stockholm".to_string(),
        fee_percent: 1.0,
    }
}

/// Wire JSON for a pool, as the API sends it.
pub fn pool_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "hashrateTHs": 100.0,
        "activeWorkers": 50,
        "rejectRate": 0.01,
        "status": status,
        "last24hRevenueBTC": 0.25,
        "uptimePercent": 99.5,
        "location": "Stockholm",
        "feePercent": 1.0
    })
}

/// Five pools covering every status, with varied numeric fields.
pub fn sample_pools() -> Vec<PoolRecord> {
    let mut pools = vec![
        pool("1", "Foundry", PoolStatus::Online),
        pool("2", "AntPool", PoolStatus::Degraded),
        pool("10", "ViaBTC", PoolStatus::Offline),
        pool("3", "F2Pool", PoolStatus::Online),
        pool("4", "Braiins", PoolStatus::Degraded),
    ];
    let hashrates = [310.0, 250.5, 99.0, 250.5, 120.0];
    let workers = [900, 450, 0, 300, 450];
    for ((pool, hashrate), workers) in pools.iter_mut().zip(hashrates).zip(workers) {
        pool.hashrate_ths = hashrate;
        pool.active_workers = workers;
    }
    pools
}

/// An app with default config talking to `gateway`.
pub fn test_app(gateway: ScriptedGateway) -> App {
    App::new(Config::default(), Arc::new(gateway))
}

/// Receive one message from the app's channel and handle it.
pub async fn pump(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    let msg = rx.recv().await.expect("channel closed");
    app.handle_message(msg);
    app.message_rx = Some(rx);
}
