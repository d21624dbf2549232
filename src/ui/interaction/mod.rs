//! Mouse interaction for the pools TUI.
//!
//! Render code registers [`HitArea`]s; the event loop hit-tests clicks and
//! passes the resulting [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
