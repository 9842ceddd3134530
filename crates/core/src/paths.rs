//! Per-user locations for the config file and logs.
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "thapar";

/// Joins `thapar` onto `$<xdg_var>` when it is set and non-empty, otherwise
/// onto the platform directory.
fn app_dir(xdg_var: &str, platform_dir: fn() -> Option<PathBuf>) -> Option<PathBuf> {
    std::env::var_os(xdg_var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(platform_dir)
        .map(|base| base.join(APP_DIR))
}

/// Directory searched for `thapar.yml`. `None` on platforms without one.
pub fn config_dir() -> Option<PathBuf> {
    app_dir("XDG_CONFIG_HOME", dirs::config_dir)
}

/// Directory for log files, created if missing.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = app_dir("XDG_DATA_HOME", dirs::data_local_dir).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no data directory on this platform")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
