//! Pool table view engine
//!
//! Pure derivation of what the pools table shows:
//!
//! ```text
//! pools --filter(status)--> subset --sort(key, direction)--> rows --columns--> cells
//! ```
//!
//! Nothing here performs I/O or touches the store, so the whole pipeline can
//! be tested with plain vectors.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{PoolField, PoolRecord, PoolStatus};

// ============================================================================
// Filter
// ============================================================================

/// Status filter applied before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PoolStatus),
}

impl StatusFilter {
    /// Filter cycle order used by the filter key.
    pub const CYCLE: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(PoolStatus::Online),
        StatusFilter::Only(PoolStatus::Degraded),
        StatusFilter::Only(PoolStatus::Offline),
    ];

    pub fn matches(&self, pool: &PoolRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => pool.status == *status,
        }
    }

    pub fn next(&self) -> StatusFilter {
        let idx = Self::CYCLE.iter().position(|f| f == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Capitalized label for the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(PoolStatus::Online) => "Online",
            StatusFilter::Only(PoolStatus::Degraded) => "Degraded",
            StatusFilter::Only(PoolStatus::Offline) => "Offline",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse::<PoolStatus>().map(StatusFilter::Only),
        }
    }
}

/// Keep the pools matching `filter`, preserving input order.
pub fn filter_pools(pools: &[PoolRecord], filter: StatusFilter) -> Vec<&PoolRecord> {
    pools.iter().filter(|pool| filter.matches(pool)).collect()
}

// ============================================================================
// Sort
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header indicator for the active sort column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: PoolField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: PoolField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    pub fn new(key: PoolField, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort by `key`: the same key flips direction, a new key starts ascending.
    pub fn toggle(&mut self, key: PoolField) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }
}

fn numeric_value(pool: &PoolRecord, field: PoolField) -> Option<f64> {
    match field {
        PoolField::Id => pool.id.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        PoolField::HashrateThs => Some(pool.hashrate_ths),
        PoolField::ActiveWorkers => Some(pool.active_workers as f64),
        PoolField::RejectRate => Some(pool.reject_rate),
        PoolField::Last24hRevenueBtc => Some(pool.last_24h_revenue_btc),
        PoolField::UptimePercent => Some(pool.uptime_percent),
        PoolField::FeePercent => Some(pool.fee_percent),
        PoolField::Name | PoolField::Status | PoolField::Location => None,
    }
}

/// Ascending comparison of two pools on `field`.
///
/// Numeric fields compare as numbers. An id that is not a number sorts after
/// every numeric id; two such ids compare as strings.
pub fn compare_by(a: &PoolRecord, b: &PoolRecord, field: PoolField) -> Ordering {
    match field {
        PoolField::Name => a.name.cmp(&b.name),
        PoolField::Location => a.location.cmp(&b.location),
        PoolField::Status => a.status.as_str().cmp(b.status.as_str()),
        numeric => match (numeric_value(a, numeric), numeric_value(b, numeric)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        },
    }
}

/// Stable sort of `rows` by `sort`; ties keep their input order.
pub fn sort_pools(rows: &mut [&PoolRecord], sort: SortState) {
    rows.sort_by(|a, b| sort.direction.apply(compare_by(a, b, sort.key)));
}

/// The full filter then sort pipeline.
pub fn derive_rows(pools: &[PoolRecord], filter: StatusFilter, sort: SortState) -> Vec<&PoolRecord> {
    let mut rows = filter_pools(pools, filter);
    sort_pools(&mut rows, sort);
    rows
}

// ============================================================================
// Column render policy
// ============================================================================

/// A displayed table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: PoolField,
    /// Preferred width in cells
    pub width: u16,
}

impl Column {
    /// Header label: the field's wire name upper-cased.
    pub fn label(&self) -> String {
        self.field.wire_name().to_uppercase()
    }
}

/// The columns of the pools table, in display order. Widths fit the
/// upper-cased label plus a sort arrow.
pub const TABLE_COLUMNS: [Column; 6] = [
    Column { field: PoolField::Id, width: 6 },
    Column { field: PoolField::Name, width: 20 },
    Column { field: PoolField::HashrateThs, width: 14 },
    Column { field: PoolField::ActiveWorkers, width: 15 },
    Column { field: PoolField::RejectRate, width: 12 },
    Column { field: PoolField::Status, width: 10 },
];

/// Color key of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Error,
}

impl BadgeTone {
    pub fn for_status(status: PoolStatus) -> BadgeTone {
        match status {
            PoolStatus::Online => BadgeTone::Success,
            PoolStatus::Degraded => BadgeTone::Warning,
            PoolStatus::Offline => BadgeTone::Error,
        }
    }
}

/// Rendered content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Badge { label: String, tone: BadgeTone },
}

impl CellValue {
    pub fn text(&self) -> &str {
        match self {
            CellValue::Text(text) => text,
            CellValue::Badge { label, .. } => label,
        }
    }
}

/// `0.1234` -> `"12.34%"`.
pub fn format_reject_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// A field's natural, unformatted representation.
pub fn raw_value(pool: &PoolRecord, field: PoolField) -> String {
    match field {
        PoolField::Id => pool.id.clone(),
        PoolField::Name => pool.name.clone(),
        PoolField::HashrateThs => pool.hashrate_ths.to_string(),
        PoolField::ActiveWorkers => pool.active_workers.to_string(),
        PoolField::RejectRate => pool.reject_rate.to_string(),
        PoolField::Status => pool.status.as_str().to_string(),
        PoolField::Last24hRevenueBtc => pool.last_24h_revenue_btc.to_string(),
        PoolField::UptimePercent => pool.uptime_percent.to_string(),
        PoolField::Location => pool.location.clone(),
        PoolField::FeePercent => pool.fee_percent.to_string(),
    }
}

/// Apply the column display transform for `field`.
pub fn render_cell(pool: &PoolRecord, field: PoolField) -> CellValue {
    match field {
        PoolField::RejectRate => CellValue::Text(format_reject_rate(pool.reject_rate)),
        PoolField::Status => CellValue::Badge {
            label: pool.status.as_str().to_string(),
            tone: BadgeTone::for_status(pool.status),
        },
        other => CellValue::Text(raw_value(pool, other)),
    }
}

// ============================================================================
// Table view state
// ============================================================================

/// Filter, sort, and cursor of the interactive table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableViewState {
    pub filter: StatusFilter,
    pub sort: SortState,
    /// Index into the derived rows
    pub selected: usize,
}

impl TableViewState {
    pub fn rows<'a>(&self, pools: &'a [PoolRecord]) -> Vec<&'a PoolRecord> {
        derive_rows(pools, self.filter, self.sort)
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected = (self.selected + 1).min(row_count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside `0..row_count`.
    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }
}
