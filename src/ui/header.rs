//! Title bar, filter bar, and key legend.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use crate::view_state::{AppViewState, StatusFilter};

/// One-line title with pool counts, sort, and refresh time.
pub fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let palette = view.theme.palette();
    let mut spans = vec![Span::styled(
        " ⛏ Mining Pools",
        Style::default()
            .fg(palette.header)
            .add_modifier(Modifier::BOLD),
    )];

    let counts = if view.rows.len() == view.total_pools {
        format!("  {} pools", view.total_pools)
    } else {
        format!("  {} of {} pools", view.rows.len(), view.total_pools)
    };
    spans.push(Span::styled(counts, palette.dim()));

    let sort = &view.table.sort;
    spans.push(Span::styled(
        format!("  sort: {} {}", sort.key, sort.direction.arrow()),
        palette.dim(),
    ));

    if !view.is_mobile {
        if let Some(updated) = view.last_updated {
            spans.push(Span::styled(
                format!("  updated {}", updated.format("%H:%M:%S UTC")),
                palette.dim(),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Status filter chips, then the theme chip at the right edge. Every chip
/// is clickable.
pub fn render_filter_bar(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let palette = view.theme.palette();
    let label = Span::styled(" Status: ", palette.dim());
    let mut x = area.x + label.width() as u16;
    let mut spans = vec![label];

    for filter in StatusFilter::CYCLE {
        let text = format!(" {} ", filter.label());
        let style = if filter == view.table.filter {
            Style::default()
                .fg(palette.accent)
                .bg(palette.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.dim()
        };
        let width = text.width() as u16;
        let chip = Rect::new(x, area.y, width, 1).intersection(area);
        let style = if registry.is_hovered(chip) {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        registry.register(chip, ClickAction::SetFilter(filter));

        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    render_theme_chip(frame, area, x, view, registry);
}

/// Right-aligned theme switch; skipped when it would overlap the filters.
fn render_theme_chip(
    frame: &mut Frame,
    area: Rect,
    filters_end: u16,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let palette = view.theme.palette();
    let text = format!(" ◐ {} ", view.theme.label());
    let width = text.width() as u16;
    let right = area.x.saturating_add(area.width);
    if right < filters_end.saturating_add(width) {
        return;
    }

    let chip = Rect::new(right - width, area.y, width, 1);
    let mut style = Style::default().fg(palette.accent);
    if registry.is_hovered(chip) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    registry.register(chip, ClickAction::ToggleTheme);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), chip);
}

/// Key legend; abbreviated on narrow terminals.
pub fn render_footer(frame: &mut Frame, area: Rect, view: &AppViewState, ctx: &LayoutContext) {
    let palette = view.theme.palette();
    let hints: &[(&str, &str)] = if view.detail.is_open() {
        &[("Esc", "close"), ("q", "quit")]
    } else if ctx.shows_full_hints() {
        &[
            ("↑↓", "move"),
            ("Enter", "details"),
            ("1-6", "sort column"),
            ("s", "sort field"),
            ("d", "direction"),
            ("f", "filter"),
            ("r", "refresh"),
            ("t", "theme"),
            ("q", "quit"),
        ]
    } else {
        &[("Enter", "details"), ("f", "filter"), ("r", "refresh"), ("q", "quit")]
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}  ", action), palette.dim()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
