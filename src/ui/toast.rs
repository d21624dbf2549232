//! Error toast.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::Palette;

/// Render `message` in a box at the top center of `area`.
pub fn render_toast(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    palette: &Palette,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let width = ctx.toast_width().min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: 3.min(area.height),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error))
        .title(Span::styled(
            " Error ",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(" Esc to dismiss ", palette.dim()));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(message.to_string()))
            .style(Style::default().bg(palette.dialog_bg).fg(palette.text))
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
    registry.register(rect, ClickAction::DismissToast);
}
