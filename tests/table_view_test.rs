//! Table view derivation: filter, sort, and cell formatting over realistic
//! pool lists.

mod common;

use common::{pool, sample_pools};
use poolwatch::models::{PoolField, PoolStatus};
use poolwatch::view_state::{
    derive_rows, filter_pools, format_reject_rate, render_cell, BadgeTone, CellValue,
    SortDirection, SortState, StatusFilter, TABLE_COLUMNS,
};

fn ids(rows: &[&poolwatch::models::PoolRecord]) -> Vec<String> {
    rows.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_filter_all_returns_everything_in_order() {
    let pools = sample_pools();
    let rows = filter_pools(&pools, StatusFilter::All);
    assert_eq!(ids(&rows), vec!["1", "2", "10", "3", "4"]);
}

#[test]
fn test_filter_is_a_subset_with_matching_status() {
    let pools = sample_pools();
    for status in PoolStatus::ALL {
        let rows = filter_pools(&pools, StatusFilter::Only(status));
        assert!(rows.iter().all(|p| p.status == status));
        assert_eq!(
            rows.len(),
            pools.iter().filter(|p| p.status == status).count()
        );
    }
}

#[test]
fn test_numeric_id_sort_is_numeric_not_lexicographic() {
    let pools = sample_pools();
    let rows = derive_rows(&pools, StatusFilter::All, SortState::new(PoolField::Id, SortDirection::Asc));
    assert_eq!(ids(&rows), vec!["1", "2", "3", "4", "10"]);
}

#[test]
fn test_non_numeric_ids_sort_after_numeric_ones() {
    let pools = vec![
        pool("beta", "B", PoolStatus::Online),
        pool("7", "Seven", PoolStatus::Online),
        pool("alpha", "A", PoolStatus::Online),
    ];
    let rows = derive_rows(&pools, StatusFilter::All, SortState::new(PoolField::Id, SortDirection::Asc));
    assert_eq!(ids(&rows), vec!["7", "alpha", "beta"]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let pools = sample_pools();
    // AntPool (2) and F2Pool (3) tie on hashrate
    let asc = derive_rows(
        &pools,
        StatusFilter::All,
        SortState::new(PoolField::HashrateThs, SortDirection::Asc),
    );
    assert_eq!(ids(&asc), vec!["10", "4", "2", "3", "1"]);

    let desc = derive_rows(
        &pools,
        StatusFilter::All,
        SortState::new(PoolField::HashrateThs, SortDirection::Desc),
    );
    assert_eq!(ids(&desc), vec!["1", "2", "3", "4", "10"]);
}

#[test]
fn test_filter_then_sort() {
    let pools = sample_pools();
    let rows = derive_rows(
        &pools,
        StatusFilter::Only(PoolStatus::Degraded),
        SortState::new(PoolField::Name, SortDirection::Asc),
    );
    assert_eq!(ids(&rows), vec!["2", "4"]);
}

#[test]
fn test_derive_does_not_mutate_input() {
    let pools = sample_pools();
    let before = pools.clone();
    let _ = derive_rows(&pools, StatusFilter::All, SortState::new(PoolField::Name, SortDirection::Desc));
    assert_eq!(pools, before);
}

#[test]
fn test_sort_toggle_cycle() {
    let mut sort = SortState::default();
    assert_eq!(sort, SortState::new(PoolField::Name, SortDirection::Asc));

    sort.toggle(PoolField::Name);
    assert_eq!(sort.direction, SortDirection::Desc);

    sort.toggle(PoolField::ActiveWorkers);
    assert_eq!(sort, SortState::new(PoolField::ActiveWorkers, SortDirection::Asc));
}

#[test]
fn test_cells_follow_column_order() {
    let mut record = pool("5", "Luxor", PoolStatus::Offline);
    record.reject_rate = 0.0123;
    let cells: Vec<CellValue> = TABLE_COLUMNS
        .iter()
        .map(|column| render_cell(&record, column.field))
        .collect();

    let texts: Vec<&str> = cells.iter().map(CellValue::text).collect();
    assert_eq!(texts, vec!["5", "Luxor", "100", "50", "1.23%", "offline"]);
    assert!(matches!(
        cells[5],
        CellValue::Badge { tone: BadgeTone::Error, .. }
    ));
}

#[test]
fn test_reject_rate_formatting() {
    assert_eq!(format_reject_rate(0.0), "0.00%");
    assert_eq!(format_reject_rate(0.5), "50.00%");
    assert_eq!(format_reject_rate(1.0), "100.00%");
}

#[test]
fn test_desc_is_exact_reverse_for_distinct_keys() {
    let pools = sample_pools();
    let asc = derive_rows(&pools, StatusFilter::All, SortState::new(PoolField::Name, SortDirection::Asc));
    let mut desc = derive_rows(&pools, StatusFilter::All, SortState::new(PoolField::Name, SortDirection::Desc));
    desc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}
