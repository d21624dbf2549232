//! Click action handler for the mouse interaction system.
//!
//! Translates actions dispatched from the hit area registry into App calls.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SortBy(field) => {
            app.sort_by(field);
            tracing::debug!("Click: SortBy({})", field);
        }
        ClickAction::OpenRow(index) => {
            if app.detail.is_open() {
                return;
            }
            tracing::debug!("Click: OpenRow({})", index);
            app.open_detail(index);
        }
        ClickAction::SetFilter(filter) => {
            app.set_filter(filter);
            tracing::debug!("Click: SetFilter({})", filter);
        }
        ClickAction::CloseDetail => {
            app.close_detail();
            tracing::debug!("Click: CloseDetail - overlay closed");
        }
        ClickAction::DismissToast => {
            app.dismiss_toast();
            tracing::debug!("Click: DismissToast");
        }
        ClickAction::ToggleTheme => {
            if app.detail.is_open() {
                return;
            }
            app.toggle_theme();
            tracing::debug!("Click: ToggleTheme -> {}", app.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedGateway;
    use crate::config::Config;
    use crate::models::{PoolField, PoolStatus};
    use crate::view_state::{SortDirection, StatusFilter};
    use std::sync::Arc;

    #[test]
    fn test_click_sorts_and_filters() {
        let mut app = App::new(Config::default(), Arc::new(ScriptedGateway::default()));

        handle_click_action(&mut app, ClickAction::SortBy(PoolField::Name));
        assert_eq!(app.table.sort.direction, SortDirection::Desc);

        handle_click_action(
            &mut app,
            ClickAction::SetFilter(StatusFilter::Only(PoolStatus::Offline)),
        );
        assert_eq!(app.table.filter.as_str(), "offline");

        handle_click_action(&mut app, ClickAction::ToggleTheme);
        assert_eq!(app.theme, crate::ui::ThemeMode::Light);
    }
}
