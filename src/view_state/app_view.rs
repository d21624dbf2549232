//! Main view state struct for UI rendering
//!
//! This module provides the `AppViewState` struct, which contains all data
//! that UI components need to render without requiring access to the full App.

use chrono::{DateTime, Utc};

use crate::models::PoolRecord;
use crate::state::DetailFlow;
use crate::ui::ThemeMode;

use super::table::TableViewState;

/// Complete view state for one frame.
///
/// Borrows from the `App`; the lifetime `'a` is that borrow. UI components
/// are pure functions of this struct:
/// `fn render(view: &AppViewState, registry: &mut HitAreaRegistry)`.
pub struct AppViewState<'a> {
    // =========================================================================
    // Terminal
    // =========================================================================
    pub terminal_width: u16,
    pub terminal_height: u16,

    /// Tick counter for the spinner
    pub tick_count: u64,

    /// Active color theme
    pub theme: ThemeMode,

    // =========================================================================
    // Store
    // =========================================================================
    /// Rows after filter and sort, in display order
    pub rows: Vec<&'a PoolRecord>,

    /// Number of pools before filtering
    pub total_pools: usize,

    pub is_loading: bool,

    /// Store error, shown as a toast
    pub error: Option<&'a str>,

    pub is_mobile: bool,

    pub last_updated: Option<DateTime<Utc>>,

    // =========================================================================
    // Table and detail
    // =========================================================================
    pub table: &'a TableViewState,

    pub detail: &'a DetailFlow,
}

impl<'a> AppViewState<'a> {
    /// The row under the cursor, if any.
    pub fn selected_row(&self) -> Option<&'a PoolRecord> {
        self.rows.get(self.table.selected).copied()
    }
}
