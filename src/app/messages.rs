//! AppMessage enum for async communication within the application.

use crate::error::GatewayError;
use crate::models::PoolRecord;
use crate::state::{DetailTicket, ListTicket, PoolTicket};

/// Results of spawned gateway calls
#[derive(Debug)]
pub enum AppMessage {
    /// A list fetch finished
    PoolsFetched {
        ticket: ListTicket,
        result: Result<Vec<PoolRecord>, GatewayError>,
    },
    /// A by-id fetch started by the detail overlay finished
    PoolFetched {
        ticket: PoolTicket,
        detail: DetailTicket,
        result: Result<PoolRecord, GatewayError>,
    },
}
