//! Color themes for the poolwatch UI
//!
//! Two palettes, dark (default) and light, switched at runtime with `t` or
//! the theme chip. Renderers read colors from [`ThemeMode::palette`].

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::view_state::BadgeTone;

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    /// Chip text
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark mode",
            ThemeMode::Light => "Light mode",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background; `Reset` keeps the terminal's own
    pub background: Color,
    /// Default text
    pub text: Color,
    pub border: Color,
    /// Highlights and important elements
    pub accent: Color,
    pub header: Color,
    /// Less important info
    pub dim: Color,
    /// Selected table row and active chip
    pub selected_bg: Color,
    pub dialog_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Reset,
    text: Color::Reset,
    border: Color::DarkGray,
    accent: Color::White,
    header: Color::White,
    dim: Color::DarkGray,
    selected_bg: Color::Rgb(30, 40, 60),
    dialog_bg: Color::Rgb(10, 15, 35),
    // #04B575
    success: Color::Rgb(4, 181, 117),
    warning: Color::Rgb(230, 170, 30),
    error: Color::Red,
};

// ============================================================================
// Light Color Theme
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 248, 250),
    text: Color::Rgb(20, 20, 30),
    border: Color::Rgb(170, 170, 180),
    accent: Color::Rgb(25, 90, 200),
    header: Color::Rgb(20, 20, 30),
    dim: Color::Rgb(110, 110, 120),
    selected_bg: Color::Rgb(215, 228, 248),
    dialog_bg: Color::Rgb(255, 255, 255),
    success: Color::Rgb(0, 130, 80),
    warning: Color::Rgb(175, 105, 0),
    error: Color::Rgb(200, 30, 30),
};

impl Palette {
    /// Foreground color of a status badge.
    pub fn badge_color(&self, tone: BadgeTone) -> Color {
        match tone {
            BadgeTone::Success => self.success,
            BadgeTone::Warning => self.warning,
            BadgeTone::Error => self.error,
        }
    }

    pub fn badge_style(&self, tone: BadgeTone) -> Style {
        Style::default()
            .fg(self.badge_color(tone))
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Base style painted under the whole frame.
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }
}
