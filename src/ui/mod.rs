//! UI rendering for the mining pools dashboard
//!
//! Screen layout, top to bottom:
//! - Header with pool counts, active sort, and refresh time
//! - Status filter chips
//! - Pools table (or the loading indicator)
//! - Key legend
//!
//! The detail overlay and the error toast draw on top.
//!
//! Rendering is a pure function of [`AppViewState`]; clickable regions are
//! registered in a [`HitAreaRegistry`] as they are drawn.

mod detail;
mod header;
mod helpers;
pub mod interaction;
mod layout;
mod pools_table;
mod theme;
mod toast;

pub use detail::detail_title;
pub use layout::{LayoutContext, FULL_HINTS_WIDTH};
pub use theme::{Palette, ThemeMode, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Layout},
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::view_state::AppViewState;
use interaction::HitAreaRegistry;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI for `app` and refresh its hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let mut registry = std::mem::take(&mut app.hit_registry);
    registry.clear();
    render_view(frame, &app.view_state(), &mut registry);
    app.hit_registry = registry;
}

/// Render one frame from a view state.
pub fn render_view(frame: &mut Frame, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let area = frame.area();
    let ctx = LayoutContext::from_area(area);
    let palette = view.theme.palette();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header_area, filter_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render_header(frame, header_area, view);
    header::render_filter_bar(frame, filter_area, view, registry);
    pools_table::render_pools_table(frame, body_area, view, registry);
    header::render_footer(frame, footer_area, view, &ctx);

    detail::render_detail_overlay(frame, area, view, &ctx, registry);

    if let Some(message) = view.error {
        toast::render_toast(frame, area, message, palette, &ctx, registry);
    }
}
