//! Detail flow
//!
//! Per-selection state machine behind the pool detail overlay:
//!
//! ```text
//! Idle --activate--> Loading --resolve(Ok)--> Loaded
//!                       |
//!                       +----resolve(Err)--> Failed
//! any --close--> Idle
//! ```
//!
//! Unfenced, a later outcome may also move `Loaded` or `Failed` to either.
//!
//! The flow is independent from the table's own state. It holds the snapshot
//! the user selected while the fresh record is fetched.

use tracing::{debug, info};

use super::fencing::{FencingPolicy, RequestId, RequestSequence};
use super::pools::PoolsStore;
use crate::models::PoolRecord;

/// Message shown when a fetch fails without the store recording why.
pub const DETAIL_FALLBACK_ERROR: &str = "Failed to load pool";

/// Phase of the detail flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Handle tying a fetch result to the activation that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket(RequestId);

impl DetailTicket {
    pub fn request_id(&self) -> RequestId {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailFlow {
    phase: DetailPhase,
    pool: Option<PoolRecord>,
    error: Option<String>,
    fencing: FencingPolicy,
    activations: RequestSequence,
}

impl DetailFlow {
    pub fn new(fencing: FencingPolicy) -> Self {
        Self {
            fencing,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// The overlay is visible in every phase except `Idle`.
    pub fn is_open(&self) -> bool {
        self.phase != DetailPhase::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }

    /// The record to display: the stale snapshot while loading, the fresh
    /// record once loaded, nothing after a failure.
    pub fn pool(&self) -> Option<&PoolRecord> {
        self.pool.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fresh cycle for `snapshot`, whatever the current phase.
    pub fn activate(&mut self, snapshot: PoolRecord) -> DetailTicket {
        let id = self.activations.issue();
        info!("Opening detail for pool {} (activation {})", snapshot.id, id);
        self.phase = DetailPhase::Loading;
        self.error = None;
        self.pool = Some(snapshot);
        DetailTicket(id)
    }

    /// Apply the outcome of the fetch started by `ticket`.
    ///
    /// Returns `false` when the outcome was dropped. With
    /// [`FencingPolicy::LatestIssued`] only the newest activation may resolve,
    /// and only while loading. With [`FencingPolicy::LastResolved`] any
    /// outcome lands while the overlay is open, overwriting an earlier one.
    pub fn resolve(&mut self, ticket: DetailTicket, outcome: Result<PoolRecord, String>) -> bool {
        if !self.admits(ticket) {
            debug!(
                "Ignoring detail result for activation {} (phase {:?})",
                ticket.0, self.phase
            );
            return false;
        }

        match outcome {
            Ok(pool) => {
                self.phase = DetailPhase::Loaded;
                self.pool = Some(pool);
            }
            Err(message) => {
                self.phase = DetailPhase::Failed;
                self.pool = None;
                self.error = Some(message);
            }
        }
        true
    }

    fn admits(&self, ticket: DetailTicket) -> bool {
        match self.fencing {
            FencingPolicy::LatestIssued => {
                self.phase == DetailPhase::Loading
                    && self.fencing.admits(&self.activations, ticket.0)
            }
            FencingPolicy::LastResolved => self.phase != DetailPhase::Idle,
        }
    }

    /// Dismiss the overlay and forget the selection.
    pub fn close(&mut self) {
        self.phase = DetailPhase::Idle;
        self.pool = None;
        self.error = None;
    }

    /// Run a whole cycle against `store`: activate, fetch by id, resolve.
    pub async fn load(&mut self, store: &mut PoolsStore, snapshot: PoolRecord) {
        let id = snapshot.id.clone();
        let ticket = self.activate(snapshot);
        let fetched = store.fetch_pool_by_id(&id).await;
        let outcome = fetched.ok_or_else(|| {
            store
                .error()
                .unwrap_or(DETAIL_FALLBACK_ERROR)
                .to_string()
        });
        self.resolve(ticket, outcome);
    }
}
