//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - JSON GET requests
//! - [`PoolGateway`] - list/by-id access to the remote pool API

pub mod gateway;
pub mod http;

pub use gateway::PoolGateway;
pub use http::{HttpClient, HttpError, HttpResponse};
