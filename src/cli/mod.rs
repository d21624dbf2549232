//! CLI module for poolwatch.
//!
//! Without a subcommand the binary starts the TUI. The `list` and `show`
//! subcommands fetch once through the same [`PoolsStore`] the TUI uses and
//! print the result:
//!
//! ```text
//! poolwatch list --status online --sort hashrateTHs --desc
//! poolwatch show 42 --json
//! ```

pub mod args;

pub use args::{Cli, CliCommand, ListArgs, ShowArgs};

use std::io::Write;

use color_eyre::eyre::{eyre, Result};
use tracing::info;

use crate::cli_output::{format_pool_detail, format_pools_table};
use crate::state::{PoolsStore, DETAIL_FALLBACK_ERROR};
use crate::view_state::{derive_rows, StatusFilter};

/// Fetch the pool list and print the filtered, sorted rows to `out`.
pub async fn run_list<W: Write>(store: &mut PoolsStore, args: &ListArgs, out: &mut W) -> Result<()> {
    store.fetch_pools().await;
    if let Some(message) = store.error() {
        return Err(eyre!("{}", message));
    }

    let rows = derive_rows(store.pools(), args.status, args.sort_state());
    info!(
        "Listing {} of {} pools (status {})",
        rows.len(),
        store.pools().len(),
        args.status
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
    } else {
        if args.status != StatusFilter::All {
            writeln!(out, "Status: {}", args.status.label())?;
        }
        write!(out, "{}", format_pools_table(&rows))?;
    }
    Ok(())
}

/// Fetch one pool and print its details to `out`.
pub async fn run_show<W: Write>(store: &mut PoolsStore, args: &ShowArgs, out: &mut W) -> Result<()> {
    let pool = match store.fetch_pool_by_id(&args.id).await {
        Some(pool) => pool,
        None => {
            let message = store.error().unwrap_or(DETAIL_FALLBACK_ERROR);
            return Err(eyre!("{}", message));
        }
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &pool)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_pool_detail(&pool))?;
    }
    Ok(())
}
