//! Plain-text output for the one-shot CLI commands.

mod pools;

pub use pools::{format_pool_detail, format_pools_table, LINE_WIDTH};
