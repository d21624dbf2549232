//! Tests for the dirty flag mechanism
//!
//! The dirty flag (`needs_redraw`) lets the event loop skip drawing when
//! nothing visible changed. Every user action and every fetch result must
//! set it.

mod common;

use common::{sample_pools, test_app};
use poolwatch::adapters::ScriptedGateway;
use poolwatch::app::AppMessage;
use poolwatch::error::GatewayError;
use poolwatch::models::PoolField;

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let app = test_app(ScriptedGateway::new());
    assert!(app.needs_redraw, "App should initialize with needs_redraw=true");
}

#[test]
fn test_table_actions_mark_dirty() {
    let mut app = test_app(ScriptedGateway::new());
    let actions: [fn(&mut poolwatch::app::App); 5] = [
        |app| app.sort_by(PoolField::HashrateThs),
        |app| app.flip_sort_direction(),
        |app| app.cycle_filter(),
        |app| app.select_next(),
        |app| app.select_prev(),
    ];

    for action in actions {
        app.needs_redraw = false;
        action(&mut app);
        assert!(app.needs_redraw);
    }
}

#[test]
fn test_fetch_result_marks_dirty() {
    let mut app = test_app(ScriptedGateway::new());
    let ticket = app.store.begin_fetch_pools();
    app.needs_redraw = false;

    app.handle_message(AppMessage::PoolsFetched {
        ticket,
        result: Ok(sample_pools()),
    });

    assert!(app.needs_redraw, "A fetch result should mark dirty");
}

#[test]
fn test_dismiss_toast_marks_dirty() {
    let mut app = test_app(ScriptedGateway::new());
    let ticket = app.store.begin_fetch_pools();
    app.handle_message(AppMessage::PoolsFetched {
        ticket,
        result: Err(GatewayError::new("down")),
    });
    app.needs_redraw = false;

    app.dismiss_toast();

    assert!(app.needs_redraw, "dismiss_toast() should mark dirty");
    assert_eq!(app.store.error(), None);
}

#[test]
fn test_update_terminal_dimensions_marks_dirty() {
    let mut app = test_app(ScriptedGateway::new());
    app.needs_redraw = false;

    app.update_terminal_dimensions(100, 30);

    assert!(app.needs_redraw);
}

#[test]
fn test_loading_animates() {
    let mut app = test_app(ScriptedGateway::new());
    assert!(!app.is_animating());

    let ticket = app.store.begin_fetch_pools();
    assert!(app.is_animating(), "The spinner needs steady redraws");

    app.handle_message(AppMessage::PoolsFetched {
        ticket,
        result: Ok(Vec::new()),
    });
    assert!(!app.is_animating());
}
