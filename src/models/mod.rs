//! Data models shared by the gateway, store, and views.

pub mod pool;

pub use pool::{PoolField, PoolRecord, PoolStatus};
