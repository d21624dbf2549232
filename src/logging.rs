//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so the interactive mode logs to a file. One-shot CLI
//! commands log to stderr instead. Both honor `POOLWATCH_LOG` as an
//! `EnvFilter` directive string and default to `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "POOLWATCH_LOG";

fn env_filter() -> EnvFilter {
    let mut filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    for directive in ["hyper=warn", "reqwest=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Open (appending) the log file at `path`, creating parent directories.
pub fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install a subscriber writing to `path`.
///
/// Returns the path on success. Fails if a global subscriber is already set.
pub fn init_file_logging(path: &Path) -> io::Result<PathBuf> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(path.to_path_buf())
}

/// Install a compact subscriber writing to stderr.
pub fn init_stderr_logging() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
