//! Simple line-based rendering of pools for stdout.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::models::PoolRecord;
use crate::view_state::{format_reject_rate, render_cell, TABLE_COLUMNS};

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Render rows as an aligned text table.
///
/// ```text
/// ID  NAME      HASHRATETHS  ...
/// ──  ────────  ───────────
/// 1   Alpha     1234.5       ...
/// ```
pub fn format_pools_table(rows: &[&PoolRecord]) -> String {
    let header: Vec<String> = TABLE_COLUMNS.iter().map(|c| c.label()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|pool| {
            TABLE_COLUMNS
                .iter()
                .map(|c| render_cell(pool, c.field).text().to_string())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..TABLE_COLUMNS.len())
        .map(|i| {
            body.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let _ = writeln!(out, "{}", line(&header));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in &body {
        let _ = writeln!(out, "{}", line(row));
    }
    if rows.is_empty() {
        let _ = writeln!(out, "(no pools)");
    }
    out
}

/// Render one pool in the same sections as the detail overlay.
///
/// ```text
/// Pool details: Alpha
/// ════════════════════════════════════════════════════════════
/// Basic information
///   Name:         Alpha
/// ```
pub fn format_pool_detail(pool: &PoolRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pool details: {}", pool.name);
    let _ = writeln!(out, "{}", "═".repeat(LINE_WIDTH));

    let sections: [(&str, Vec<(&str, String)>); 3] = [
        (
            "Basic information",
            vec![
                ("Id", pool.id.clone()),
                ("Name", pool.name.clone()),
                ("Location", pool.location.clone()),
                ("Status", pool.status.to_string()),
            ],
        ),
        (
            "Performance",
            vec![
                ("24h revenue", format!("{} BTC", pool.last_24h_revenue_btc)),
                ("Uptime", format!("{}%", pool.uptime_percent)),
                ("Fee", format!("{}%", pool.fee_percent)),
            ],
        ),
        (
            "Statistics",
            vec![
                ("Hashrate", format!("{} TH/s", pool.hashrate_ths)),
                ("Workers", pool.active_workers.to_string()),
                ("Reject rate", format_reject_rate(pool.reject_rate)),
            ],
        ),
    ];

    for (title, fields) in sections {
        let _ = writeln!(out, "{}", title);
        for (label, value) in fields {
            let _ = writeln!(out, "  {} {}", pad(&format!("{}:", label), 13), value);
        }
    }
    out
}
