//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Results of spawned fetches, sent back to the event loop
//! - key routing in `input`, user actions in `actions`
//!
//! The `App` owns the [`PoolsStore`], the [`DetailFlow`], and the table's
//! filter/sort/cursor. Network calls run in spawned tasks; every state
//! transition happens on the event loop when their message arrives.

mod actions;
mod handlers;
mod input;
mod messages;
mod state_methods;
mod view;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{DetailFlow, PoolsStore};
use crate::traits::PoolGateway;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::ThemeMode;
use crate::view_state::TableViewState;

/// Main application state
pub struct App {
    /// Pool list, loading/error flags, layout hint
    pub store: PoolsStore,
    /// Detail overlay state machine
    pub detail: DetailFlow,
    /// Filter, sort, and cursor of the table
    pub table: TableViewState,
    pub config: Config,
    /// Flag to track if app should quit
    pub should_quit: bool,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Set whenever visible state changes; cleared after each draw
    pub needs_redraw: bool,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// When the current error toast appeared
    pub(crate) toast_since: Option<Instant>,
    /// Message the toast timer was started for
    pub(crate) toast_message: Option<String>,
    /// Active color theme
    pub theme: ThemeMode,
}

impl App {
    pub fn new(config: Config, gateway: Arc<dyn PoolGateway>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let store = PoolsStore::with_fencing(gateway, config.fencing);
        let detail = DetailFlow::new(config.fencing);
        let theme = config.theme;

        Self {
            store,
            detail,
            table: TableViewState::default(),
            config,
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            needs_redraw: true,
            hit_registry: HitAreaRegistry::new(),
            toast_since: None,
            toast_message: None,
            theme,
        }
    }
}
