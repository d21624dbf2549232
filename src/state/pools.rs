//! Pools store
//!
//! Holds the last fetched pool list together with the loading/error flags of
//! the list fetch and the `is_mobile` layout flag.
//!
//! The store is split in two layers:
//!
//! - [`StoreState`] plus [`StoreEvent`]: pure, synchronous transitions with no
//!   I/O. [`StoreState::reduce`] is the `(state, event) -> state` function.
//! - [`PoolsStore`]: owns a state value and a [`PoolGateway`] and forms the
//!   effect boundary. Each action is available as `begin_*` / `complete_*`
//!   halves (the network call happens in between, usually in a spawned task)
//!   and as a single `async fn` that runs both halves.
//!
//! Gateway errors never escape an action: they land in [`StoreState::error`]
//! or become a `None` return.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::fencing::{FencingPolicy, RequestId, RequestSequence};
use crate::error::GatewayError;
use crate::models::PoolRecord;
use crate::traits::PoolGateway;

// ============================================================================
// Pure state
// ============================================================================

/// Snapshot of everything the store holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Pools in gateway response order
    pub pools: Vec<PoolRecord>,
    /// A list fetch is in flight
    pub is_loading: bool,
    /// Message of the last failed fetch, until cleared or superseded
    pub error: Option<String>,
    /// Layout hint for presentational code
    pub is_mobile: bool,
    /// When the current `pools` were received
    pub last_updated: Option<DateTime<Utc>>,
}

/// A transition of [`StoreState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A list fetch was issued
    ListRequested,
    /// A list fetch succeeded
    ListLoaded {
        pools: Vec<PoolRecord>,
        at: DateTime<Utc>,
    },
    /// A list fetch failed
    ListFailed { message: String },
    /// A by-id fetch failed
    PoolFailed { message: String },
    /// The error was dismissed
    ErrorCleared,
    /// The layout hint was recomputed
    MobileChanged(bool),
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::ListRequested => {
                self.is_loading = true;
                self.error = None;
            }
            StoreEvent::ListLoaded { pools, at } => {
                self.pools = pools;
                self.is_loading = false;
                self.last_updated = Some(at);
            }
            StoreEvent::ListFailed { message } => {
                self.error = Some(message);
                self.is_loading = false;
            }
            StoreEvent::PoolFailed { message } => {
                self.error = Some(message);
            }
            StoreEvent::ErrorCleared => {
                self.error = None;
            }
            StoreEvent::MobileChanged(value) => {
                self.is_mobile = value;
            }
        }
    }

    /// `(state, event) -> state`.
    pub fn reduce(mut self, event: StoreEvent) -> Self {
        self.apply(event);
        self
    }
}

// ============================================================================
// Tickets
// ============================================================================

/// Handle for an in-flight list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket(RequestId);

impl ListTicket {
    pub fn request_id(&self) -> RequestId {
        self.0
    }
}

/// Handle for an in-flight by-id fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolTicket {
    request_id: RequestId,
    pool_id: String,
}

impl PoolTicket {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn pool_id(&self) -> &str {
        &self.pool_id
    }
}

// ============================================================================
// Store
// ============================================================================

/// The pool store: state plus the effect boundary to the gateway.
///
/// One instance lives for the whole session and is passed by reference to
/// whoever needs it.
pub struct PoolsStore {
    state: StoreState,
    gateway: Arc<dyn PoolGateway>,
    fencing: FencingPolicy,
    list_requests: RequestSequence,
    pool_requests: RequestSequence,
    publisher: watch::Sender<StoreState>,
}

impl PoolsStore {
    /// Create an empty store with the default fencing policy.
    pub fn new(gateway: Arc<dyn PoolGateway>) -> Self {
        Self::with_fencing(gateway, FencingPolicy::default())
    }

    pub fn with_fencing(gateway: Arc<dyn PoolGateway>, fencing: FencingPolicy) -> Self {
        let state = StoreState::new();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            gateway,
            fencing,
            list_requests: RequestSequence::new(),
            pool_requests: RequestSequence::new(),
            publisher,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn pools(&self) -> &[PoolRecord] {
        &self.state.pools
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_mobile(&self) -> bool {
        self.state.is_mobile
    }

    pub fn fencing(&self) -> FencingPolicy {
        self.fencing
    }

    /// Shared handle to the gateway, for callers that run the network half
    /// of an action themselves.
    pub fn gateway(&self) -> Arc<dyn PoolGateway> {
        Arc::clone(&self.gateway)
    }

    /// Receive every state the store transitions into.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.publisher.subscribe()
    }

    fn dispatch(&mut self, event: StoreEvent) {
        self.state.apply(event);
        self.publisher.send_replace(self.state.clone());
    }

    // ------------------------------------------------------------------------
    // List fetch
    // ------------------------------------------------------------------------

    /// First half of `fetch_pools`: mark loading and clear the error.
    pub fn begin_fetch_pools(&mut self) -> ListTicket {
        let id = self.list_requests.issue();
        debug!("Fetching pool list (request {})", id);
        self.dispatch(StoreEvent::ListRequested);
        ListTicket(id)
    }

    /// Second half of `fetch_pools`.
    ///
    /// Returns `false` if the result was dropped because a newer list fetch
    /// has been issued since.
    pub fn complete_fetch_pools(
        &mut self,
        ticket: ListTicket,
        result: Result<Vec<PoolRecord>, GatewayError>,
    ) -> bool {
        if !self.fencing.admits(&self.list_requests, ticket.0) {
            debug!(
                "Dropping stale pool list result (request {}, latest {:?})",
                ticket.0,
                self.list_requests.latest()
            );
            return false;
        }

        match result {
            Ok(pools) => {
                info!("Loaded {} pools (request {})", pools.len(), ticket.0);
                self.dispatch(StoreEvent::ListLoaded {
                    pools,
                    at: Utc::now(),
                });
            }
            Err(err) => {
                warn!("Pool list fetch failed (request {}): {}", ticket.0, err);
                self.dispatch(StoreEvent::ListFailed {
                    message: err.into_message(),
                });
            }
        }
        true
    }

    /// Fetch the pool list and apply the outcome.
    pub async fn fetch_pools(&mut self) {
        let ticket = self.begin_fetch_pools();
        let result = self.gateway.list_pools().await;
        self.complete_fetch_pools(ticket, result);
    }

    // ------------------------------------------------------------------------
    // By-id fetch
    // ------------------------------------------------------------------------

    /// First half of `fetch_pool_by_id`. Touches no state.
    pub fn begin_fetch_pool_by_id(&mut self, id: &str) -> PoolTicket {
        let request_id = self.pool_requests.issue();
        debug!("Fetching pool {} (request {})", id, request_id);
        PoolTicket {
            request_id,
            pool_id: id.to_string(),
        }
    }

    /// Second half of `fetch_pool_by_id`.
    ///
    /// Returns the record on success. On failure the error is stored and
    /// `None` is returned. A superseded result is dropped and also yields
    /// `None`. `pools` and `is_loading` are never touched.
    pub fn complete_fetch_pool_by_id(
        &mut self,
        ticket: PoolTicket,
        result: Result<PoolRecord, GatewayError>,
    ) -> Option<PoolRecord> {
        if !self.fencing.admits(&self.pool_requests, ticket.request_id) {
            debug!(
                "Dropping stale result for pool {} (request {})",
                ticket.pool_id, ticket.request_id
            );
            return None;
        }

        match result {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!("Fetching pool {} failed: {}", ticket.pool_id, err);
                self.dispatch(StoreEvent::PoolFailed {
                    message: err.into_message(),
                });
                None
            }
        }
    }

    /// Fetch one pool's full record.
    pub async fn fetch_pool_by_id(&mut self, id: &str) -> Option<PoolRecord> {
        let ticket = self.begin_fetch_pool_by_id(id);
        let result = self.gateway.get_pool(id).await;
        self.complete_fetch_pool_by_id(ticket, result)
    }

    // ------------------------------------------------------------------------
    // Plain setters
    // ------------------------------------------------------------------------

    pub fn clear_error(&mut self) {
        self.dispatch(StoreEvent::ErrorCleared);
    }

    pub fn set_is_mobile(&mut self, value: bool) {
        self.dispatch(StoreEvent::MobileChanged(value));
    }
}
