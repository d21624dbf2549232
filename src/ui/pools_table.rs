//! Pools table rendering.
//!
//! Rows come from the view engine in display order. Headers and rows are
//! registered as hit areas so a click sorts or opens the detail overlay.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
    Frame,
};

use super::helpers::spinner_frame;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::Palette;
use crate::view_state::{render_cell, AppViewState, CellValue, TABLE_COLUMNS};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;

fn column_constraints() -> Vec<Constraint> {
    TABLE_COLUMNS
        .iter()
        .map(|column| Constraint::Length(column.width))
        .collect()
}

/// Column rects inside `inner`, matching what `Table` lays out.
fn column_rects(inner: Rect) -> Vec<Rect> {
    let symbol_width = HIGHLIGHT_SYMBOL.chars().count() as u16;
    let columns_area = Rect {
        x: inner.x + symbol_width,
        width: inner.width.saturating_sub(symbol_width),
        ..inner
    };
    Layout::horizontal(column_constraints())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(columns_area)
        .to_vec()
}

fn header_row(view: &AppViewState, inner: Rect, registry: &HitAreaRegistry) -> Row<'static> {
    let palette = view.theme.palette();
    let sort = view.table.sort;
    let rects = column_rects(inner);
    let cells = TABLE_COLUMNS.iter().zip(rects).map(|(column, rect)| {
        let mut label = column.label();
        let mut style = palette.dim().add_modifier(Modifier::BOLD);
        if column.field == sort.key {
            label.push(' ');
            label.push_str(sort.direction.arrow());
            style = style.fg(palette.accent);
        }
        if registry.is_hovered(Rect { height: 1, ..rect }) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(label).style(style)
    });
    Row::new(cells)
}

fn body_cell(value: CellValue, palette: &Palette) -> Cell<'static> {
    match value {
        CellValue::Text(text) => Cell::from(text),
        CellValue::Badge { label, tone } => {
            let badge = Span::styled(format!("● {}", label), palette.badge_style(tone));
            Cell::from(Line::from(badge))
        }
    }
}

/// Render the table, or the loading indicator while a list fetch runs.
pub fn render_pools_table(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let palette = view.theme.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);

    if view.is_loading {
        frame.render_widget(block, area);
        render_loading(frame, inner, view.tick_count, palette);
        return;
    }

    if view.rows.is_empty() {
        frame.render_widget(block, area);
        let message = if view.total_pools == 0 {
            "No pools loaded. Press r to fetch."
        } else {
            "No pools match this filter."
        };
        let y = inner.y + inner.height / 2;
        frame.render_widget(
            Paragraph::new(message)
                .style(palette.dim())
                .centered(),
            Rect::new(inner.x, y, inner.width, 1).intersection(inner),
        );
        return;
    }

    let rows = view.rows.iter().map(|pool| {
        Row::new(
            TABLE_COLUMNS
                .iter()
                .map(|column| body_cell(render_cell(pool, column.field), palette)),
        )
    });

    let table = Table::new(rows, column_constraints())
        .header(header_row(view, inner, registry))
        .block(block)
        .flex(Flex::Start)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(
            Style::default()
                .bg(palette.selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = TableState::default().with_selected(Some(view.table.selected));
    frame.render_stateful_widget(table, area, &mut state);

    register_hit_areas(inner, state.offset(), view.rows.len(), registry);
}

fn register_hit_areas(
    inner: Rect,
    offset: usize,
    row_count: usize,
    registry: &mut HitAreaRegistry,
) {
    if inner.height == 0 {
        return;
    }

    for (column, rect) in TABLE_COLUMNS.iter().zip(column_rects(inner)) {
        let header = Rect { height: 1, ..rect };
        registry.register(header, ClickAction::SortBy(column.field));
    }

    let visible = inner.height.saturating_sub(1) as usize;
    for (line, index) in (offset..row_count).take(visible).enumerate() {
        let rect = Rect::new(inner.x, inner.y + 1 + line as u16, inner.width, 1);
        registry.register(rect, ClickAction::OpenRow(index));
    }
}

fn render_loading(frame: &mut Frame, inner: Rect, tick_count: u64, palette: &Palette) {
    if inner.height == 0 {
        return;
    }
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick_count), Style::default().fg(palette.accent)),
        Span::raw(" Loading data..."),
    ]);
    let y = inner.y + inner.height / 2;
    frame.render_widget(
        Paragraph::new(line).centered(),
        Rect::new(inner.x, y, inner.width, 1),
    );
}
