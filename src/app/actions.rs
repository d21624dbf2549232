//! User actions on the App.
//!
//! Fetches are split the same way the store splits them: the `begin_*` half
//! runs here, the gateway call runs in a spawned task, and the `complete_*`
//! half runs in `handle_message` when the task reports back.

use tracing::{debug, info};

use super::{App, AppMessage};
use crate::models::PoolField;
use crate::view_state::{StatusFilter, TABLE_COLUMNS};

impl App {
    /// Refetch the pool list.
    pub fn refresh_pools(&mut self) {
        let ticket = self.store.begin_fetch_pools();
        let gateway = self.store.gateway();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = gateway.list_pools().await;
            let _ = tx.send(AppMessage::PoolsFetched { ticket, result });
        });
        self.sync_toast();
        self.mark_dirty();
    }

    /// Open the detail overlay for the row at `index` of the current view.
    pub fn open_detail(&mut self, index: usize) {
        let snapshot = {
            let rows = self.table.rows(self.store.pools());
            match rows.get(index) {
                Some(pool) => (*pool).clone(),
                None => {
                    debug!("No row at index {}, not opening detail", index);
                    return;
                }
            }
        };

        self.table.selected = index;
        let pool_id = snapshot.id.clone();
        let detail = self.detail.activate(snapshot);
        let ticket = self.store.begin_fetch_pool_by_id(&pool_id);
        let gateway = self.store.gateway();
        let tx = self.message_sender();
        tokio::spawn(async move {
            let result = gateway.get_pool(&pool_id).await;
            let _ = tx.send(AppMessage::PoolFetched {
                ticket,
                detail,
                result,
            });
        });
        self.mark_dirty();
    }

    /// Open the detail overlay for the selected row.
    pub fn open_selected_detail(&mut self) {
        self.open_detail(self.table.selected);
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
        self.mark_dirty();
    }

    /// Switch between the dark and light palettes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {}", self.theme);
        self.mark_dirty();
    }

    /// Dismiss the error toast.
    pub fn dismiss_toast(&mut self) {
        self.store.clear_error();
        self.toast_since = None;
        self.toast_message = None;
        self.mark_dirty();
    }

    /// Toggle sorting on `field`.
    pub fn sort_by(&mut self, field: PoolField) {
        self.table.sort.toggle(field);
        info!(
            "Sorting by {} {:?}",
            self.table.sort.key, self.table.sort.direction
        );
        self.mark_dirty();
    }

    /// Toggle sorting on the displayed column at `index` (0-based).
    pub fn sort_by_column(&mut self, index: usize) {
        if let Some(column) = TABLE_COLUMNS.get(index) {
            self.sort_by(column.field);
        }
    }

    /// Move the sort key to the next field, ascending.
    pub fn cycle_sort_key(&mut self) {
        let next = self.table.sort.key.next();
        self.sort_by(next);
    }

    pub fn flip_sort_direction(&mut self) {
        self.table.sort.direction = self.table.sort.direction.flip();
        self.mark_dirty();
    }

    /// Move the status filter to the next value in the cycle.
    pub fn cycle_filter(&mut self) {
        self.table.cycle_filter();
        info!("Filtering by status: {}", self.table.filter);
        self.mark_dirty();
    }

    /// Show only pools matching `filter`.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.table.filter != filter {
            self.table.filter = filter;
            self.table.selected = 0;
            info!("Filtering by status: {}", filter);
        }
        self.mark_dirty();
    }

    pub fn select_next(&mut self) {
        let row_count = self.row_count();
        self.table.select_next(row_count);
        self.mark_dirty();
    }

    pub fn select_prev(&mut self) {
        self.table.select_prev();
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
