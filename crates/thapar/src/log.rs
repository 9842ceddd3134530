//! Debug log file for `--verbose` runs.
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, LineWriter};
use std::path::Path;
use std::sync::Mutex;
use thapar_core::paths::data_dir;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::OffsetTime;

const LOG_FILE: &str = "thapar.log";
const MAX_LOG_SIZE: u64 = 100 * 1024;
const DEFAULT_FILTER: &str = "thapar=debug,thapar_core=debug,rustyline=info";

/// Sends `tracing` output to `<data_dir>/thapar.log`. Stdout is untouched.
///
/// `RUST_LOG` overrides the default filter.
pub fn setup_logging() -> Result<()> {
    let log_path = data_dir()
        .context("Failed to get data directory")?
        .join(LOG_FILE);
    rotate_if_large(&log_path, MAX_LOG_SIZE)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(LineWriter::new(file)))
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .init();
    Ok(())
}

/// Moves `path` to `<path>.old` once it grows past `limit` bytes, replacing
/// any previous backup.
fn rotate_if_large(path: &Path, limit: u64) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > limit => fs::rename(path, path.with_extension("log.old")),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
