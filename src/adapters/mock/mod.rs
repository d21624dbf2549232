//! Mock implementations for testing.
//!
//! These let the gateway, store, and app be exercised without network
//! access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedGateway`] - [`crate::traits::PoolGateway`] returning queued results

pub mod gateway;
pub mod http;

pub use gateway::ScriptedGateway;
pub use http::{MockHttpClient, MockResponse};
