//! Keyboard and mouse routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::App;
use crate::ui::interaction::handle_click_action;

impl App {
    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.detail.is_open() {
            match key.code {
                KeyCode::Esc => self.close_detail(),
                KeyCode::Char('q') => self.quit(),
                _ => debug!("Key {:?} ignored while detail is open", key.code),
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                if self.store.error().is_some() {
                    self.dismiss_toast();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter | KeyCode::Char('i') => self.open_selected_detail(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as u8 - b'1') as usize;
                self.sort_by_column(index);
            }
            KeyCode::Char('s') => self.cycle_sort_key(),
            KeyCode::Char('d') => self.flip_sort_direction(),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('r') => self.refresh_pools(),
            KeyCode::Char('t') => self.toggle_theme(),
            other => debug!("Unbound key {:?}", other),
        }
    }

    /// Route one mouse event through the hit areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if !self.detail.is_open() => self.select_next(),
            MouseEventKind::ScrollUp if !self.detail.is_open() => self.select_prev(),
            _ => {}
        }
    }
}
