//! Error types for poolwatch.
//!
//! - [`GatewayError`] - the one failure kind of the remote pool API. Store
//!   actions trap it into state; it never escapes an action boundary.
//! - [`ConfigError`] - invalid configuration from the environment or flags.
//!
//! Transport-level failures are described by [`crate::traits::HttpError`] and
//! converted into [`GatewayError`] at the gateway.

mod config;
mod gateway;

pub use config::ConfigError;
pub use gateway::GatewayError;
