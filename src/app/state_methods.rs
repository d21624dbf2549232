//! State accessor and utility methods for the App.

use std::time::Instant;

use tokio::sync::mpsc;
use tracing::debug;

use super::{App, AppMessage};

impl App {
    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether something on screen animates (spinner) and needs steady redraws.
    pub fn is_animating(&self) -> bool {
        self.store.is_loading() || self.detail.is_loading()
    }

    /// Increment the tick counter and expire the toast.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.expire_toast(Instant::now());
    }

    /// Record new terminal dimensions and recompute the mobile flag.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        let is_mobile = self.config.is_mobile_width(width);
        if is_mobile != self.store.is_mobile() {
            debug!("Terminal {}x{}: mobile={}", width, height, is_mobile);
        }
        self.store.set_is_mobile(is_mobile);
        self.mark_dirty();
    }

    /// Number of rows the table currently shows.
    pub fn row_count(&self) -> usize {
        self.table.rows(self.store.pools()).len()
    }

    /// Start or stop the toast timer to match the store error.
    pub(crate) fn sync_toast(&mut self) {
        self.sync_toast_at(Instant::now());
    }

    /// A different message restarts the timer at `now`.
    fn sync_toast_at(&mut self, now: Instant) {
        match self.store.error() {
            None => {
                self.toast_since = None;
                self.toast_message = None;
            }
            Some(message)
                if self.toast_since.is_none() || self.toast_message.as_deref() != Some(message) =>
            {
                self.toast_message = Some(message.to_string());
                self.toast_since = Some(now);
            }
            Some(_) => {}
        }
    }

    /// Clear the store error once the toast has been up for `toast_duration`.
    pub fn expire_toast(&mut self, now: Instant) {
        self.sync_toast_at(now);
        if let Some(since) = self.toast_since {
            if now.saturating_duration_since(since) >= self.config.toast_duration {
                debug!("Error toast timed out");
                self.dismiss_toast();
            }
        }
    }
}
