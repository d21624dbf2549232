//! Pool detail overlay.
//!
//! Shows the selected snapshot while the fresh record loads, the fresh record
//! once loaded, or the error inline. Fills the screen on mobile; otherwise a
//! centered dialog with the basic and performance sections side by side.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{spinner_frame, truncate_string};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::Palette;
use crate::models::PoolRecord;
use crate::state::DetailPhase;
use crate::view_state::{format_reject_rate, AppViewState, BadgeTone};

const CLOSE_LABEL: &str = "[x]";

/// Overlay title for the given record.
pub fn detail_title(pool: Option<&PoolRecord>) -> String {
    match pool {
        Some(pool) => format!("Pool details: {}", pool.name),
        None => "Loading...".to_string(),
    }
}

fn label_value(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), palette.dim()),
        Span::raw(value),
    ])
}

fn basic_lines(pool: &PoolRecord, palette: &Palette) -> Vec<Line<'static>> {
    let tone = BadgeTone::for_status(pool.status);
    vec![
        label_value("Name", pool.name.clone(), palette),
        label_value("Location", pool.location.clone(), palette),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Status"), palette.dim()),
            Span::styled(format!("● {}", pool.status), palette.badge_style(tone)),
        ]),
    ]
}

fn performance_lines(pool: &PoolRecord, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        label_value("24h revenue", format!("{} BTC", pool.last_24h_revenue_btc), palette),
        label_value("Uptime", format!("{}%", pool.uptime_percent), palette),
        label_value("Fee", format!("{}%", pool.fee_percent), palette),
    ]
}

fn statistics_lines(pool: &PoolRecord, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        label_value("Hashrate", format!("{} TH/s", pool.hashrate_ths), palette),
        label_value("Workers", pool.active_workers.to_string(), palette),
        label_value("Reject rate", format_reject_rate(pool.reject_rate), palette),
        label_value("Uptime", format!("{}%", pool.uptime_percent), palette),
    ]
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_sections(
    frame: &mut Frame,
    area: Rect,
    pool: &PoolRecord,
    stacked: bool,
    palette: &Palette,
) {
    // 3 lines + borders
    const BASIC: u16 = 5;
    const STATS: u16 = 6;

    let (basic, performance, statistics) = if stacked {
        let [basic, performance, statistics] = Layout::vertical([
            Constraint::Length(BASIC),
            Constraint::Length(BASIC),
            Constraint::Length(STATS),
        ])
        .areas(area);
        (basic, performance, statistics)
    } else {
        let [top, statistics] =
            Layout::vertical([Constraint::Length(BASIC), Constraint::Length(STATS)]).areas(area);
        let [basic, performance] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(top);
        (basic, performance, statistics)
    };

    let sections = [
        (basic, "Basic information", basic_lines(pool, palette)),
        (performance, "Performance", performance_lines(pool, palette)),
        (statistics, "Statistics", statistics_lines(pool, palette)),
    ];
    for (rect, title, lines) in sections {
        render_section(frame, rect, title, lines, palette);
    }
}

/// Render the overlay on top of whatever is in `area`.
pub fn render_detail_overlay(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewState,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let detail = view.detail;
    if !detail.is_open() {
        return;
    }
    let palette = view.theme.palette();

    let rect = ctx.overlay_rect(area, view.is_mobile);
    frame.render_widget(Clear, rect);

    let title_width = rect.width.saturating_sub(CLOSE_LABEL.len() as u16 + 6) as usize;
    let title = truncate_string(&detail_title(detail.pool()), title_width);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.dialog_bg).fg(palette.text))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    // Close button on the top border
    let close_x = rect.x + rect.width.saturating_sub(CLOSE_LABEL.len() as u16 + 2);
    let close = Rect::new(close_x, rect.y, CLOSE_LABEL.len() as u16, 1).intersection(rect);
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL).style(Style::default().fg(palette.accent)),
        close,
    );
    registry.register(close, ClickAction::CloseDetail);

    if inner.height == 0 {
        return;
    }

    let [status_line, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    match detail.phase() {
        DetailPhase::Loading => {
            let line = Line::from(vec![
                Span::styled(spinner_frame(view.tick_count), Style::default().fg(palette.accent)),
                Span::styled(" Loading latest data...", palette.dim()),
            ]);
            frame.render_widget(Paragraph::new(line), status_line);
        }
        DetailPhase::Failed => {
            let message = detail.error().unwrap_or_default();
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("✗ ", Style::default().fg(palette.error)),
                    Span::styled(message.to_string(), Style::default().fg(palette.error)),
                ]))
                .wrap(Wrap { trim: true }),
                inner,
            );
            return;
        }
        DetailPhase::Loaded | DetailPhase::Idle => {}
    }

    if let Some(pool) = detail.pool() {
        render_sections(frame, body, pool, view.is_mobile, palette);
    }
}
