//! Sizing of the overlay, toast, and footer for the current frame.
//!
//! The mobile/desktop switch comes from the store's `is_mobile` flag; this
//! module only decides how big things are.

use ratatui::layout::Rect;

use super::helpers::centered_rect;

/// Narrower than this, the footer shows only the essential keys.
pub const FULL_HINTS_WIDTH: u16 = 80;

/// `percent` of `len`, clamped to `min..=max`.
fn scaled(len: u16, percent: u32, min: u16, max: u16) -> u16 {
    let value = (len as u32 * percent / 100).min(u16::MAX as u32) as u16;
    value.clamp(min, max)
}

/// Frame dimensions.
///
/// ```ignore
/// let ctx = LayoutContext::from_area(frame.area());
/// let overlay = ctx.overlay_rect(frame.area(), view.is_mobile);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_area(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// The detail overlay: all of `area` on mobile, otherwise a dialog of
    /// 70% each way, 60-110 columns by 18-30 rows.
    pub fn overlay_rect(&self, area: Rect, is_mobile: bool) -> Rect {
        if is_mobile {
            return area;
        }
        let width = scaled(self.width, 70, 60, 110);
        let height = scaled(self.height, 70, 18, 30);
        centered_rect(area, width, height)
    }

    /// 60% of the width within 30-80 columns, never wider than the frame.
    pub fn toast_width(&self) -> u16 {
        scaled(self.width, 60, 30, 80).min(self.width)
    }

    pub fn shows_full_hints(&self) -> bool {
        self.width >= FULL_HINTS_WIDTH
    }
}
