//! View state construction for UI rendering.

use super::App;
use crate::view_state::AppViewState;

impl App {
    /// Create a view state for UI rendering.
    ///
    /// ```ignore
    /// let view = app.view_state();
    /// ui::render_view(frame, &view, &mut registry);
    /// ```
    pub fn view_state(&self) -> AppViewState<'_> {
        let state = self.store.state();
        AppViewState {
            terminal_width: self.terminal_width,
            terminal_height: self.terminal_height,
            tick_count: self.tick_count,
            theme: self.theme,
            rows: self.table.rows(&state.pools),
            total_pools: state.pools.len(),
            is_loading: state.is_loading,
            error: state.error.as_deref(),
            is_mobile: state.is_mobile,
            last_updated: state.last_updated,
            table: &self.table,
            detail: &self.detail,
        }
    }
}
