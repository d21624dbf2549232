//! Application state management
//!
//! - [`PoolsStore`]: fetched pools, loading/error flags, layout hint
//! - [`DetailFlow`]: the detail overlay's fetch state machine
//! - [`fencing`]: request ids and the policy for superseded results

pub mod detail;
pub mod fencing;
pub mod pools;

pub use detail::{DetailFlow, DetailPhase, DetailTicket, DETAIL_FALLBACK_ERROR};
pub use fencing::{FencingPolicy, RequestId, RequestSequence};
pub use pools::{ListTicket, PoolTicket, PoolsStore, StoreEvent, StoreState};
