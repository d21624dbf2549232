//! View state module for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function: data in, pixels out. The data the UI
//! needs is gathered into [`AppViewState`], which borrows from the `App`, so
//! `ui` never has to import `app`.
//!
//! ## Components
//!
//! - [`AppViewState`]: everything a frame needs
//! - [`table`]: the pools table view engine (filter, sort, column policy)

pub mod app_view;
pub mod table;

pub use app_view::AppViewState;
pub use table::{
    derive_rows, filter_pools, format_reject_rate, render_cell, sort_pools, BadgeTone, CellValue,
    Column, SortDirection, SortState, StatusFilter, TableViewState, TABLE_COLUMNS,
};
