//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage};
use crate::state::DETAIL_FALLBACK_ERROR;

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PoolsFetched { ticket, result } => {
                self.store.complete_fetch_pools(ticket, result);
                let row_count = self.row_count();
                self.table.clamp_selection(row_count);
            }
            AppMessage::PoolFetched {
                ticket,
                detail,
                result,
            } => {
                let fetched = self.store.complete_fetch_pool_by_id(ticket, result);
                let outcome = fetched.ok_or_else(|| {
                    self.store
                        .error()
                        .unwrap_or(DETAIL_FALLBACK_ERROR)
                        .to_string()
                });
                if !self.detail.resolve(detail, outcome) {
                    debug!("Detail result arrived after the overlay moved on");
                }
            }
        }
        self.sync_toast();
    }
}
