//! Clickable regions registered while drawing a frame.
//!
//! The registry is rebuilt on every render. The mouse pointer outlives the
//! rebuild so the next frame can underline whatever it rests on.

use ratatui::layout::{Position, Rect};

use crate::models::PoolField;
use crate::view_state::StatusFilter;

/// What a click on a region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Column header: toggle sorting on that field
    SortBy(PoolField),
    /// Table row, by index into the current view
    OpenRow(usize),
    /// Filter chip
    SetFilter(StatusFilter),
    CloseDetail,
    DismissToast,
    /// Theme chip
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

/// Regions of the last frame, in paint order.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    pointer: Option<Position>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the regions of the previous frame. The pointer is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Add a region. Later regions sit on top of earlier ones.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if !rect.is_empty() {
            self.areas.push(HitArea { rect, action });
        }
    }

    /// Action of the topmost region under `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        let at = Position::new(x, y);
        self.areas
            .iter()
            .rev()
            .find(|area| area.rect.contains(at))
            .map(|area| area.action)
    }

    /// Record the pointer position. Returns true when the region under the
    /// pointer changed and a redraw would show it.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.pointer.and_then(|p| self.hit_test(p.x, p.y));
        self.pointer = Some(Position::new(x, y));
        before != self.hit_test(x, y)
    }

    /// Whether the pointer rests inside `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(p))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
