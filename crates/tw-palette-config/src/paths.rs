//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/tw-palette/`, `~/.cache/tw-palette/`
//! - macOS: `~/Library/Application Support/tw-palette/`, `~/Library/Caches/tw-palette/`
//! - Windows: `%APPDATA%\tw-palette\`, `%LOCALAPPDATA%\tw-palette\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const APP_NAME: &str = "tw-palette";

/// Get the application config directory
/// Returns ~/.config/tw-palette/ on Linux, ~/Library/Application Support/tw-palette/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    app_dir_in(&base)
}

/// Get the application cache directory
/// Returns ~/.cache/tw-palette/ on Linux, ~/Library/Caches/tw-palette/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    app_dir_in(&base)
}

/// Get the directory holding synced playground snapshots
pub fn snapshots_dir() -> Result<PathBuf> {
    snapshots_dir_in(&cache_dir()?)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(app_config_path_in(&config_dir()?))
}

fn app_dir_in(base: &Path) -> Result<PathBuf> {
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {:?}", dir))?;
    Ok(dir)
}

fn snapshots_dir_in(cache: &Path) -> Result<PathBuf> {
    let dir = cache.join("snapshots");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create snapshot directory: {:?}", dir))?;
    Ok(dir)
}

fn app_config_path_in(config: &Path) -> PathBuf {
    config.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir_is_created() {
        let base = tempfile::tempdir().unwrap();
        let dir = app_dir_in(base.path()).unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_snapshots_dir_is_inside_cache_dir() {
        let base = tempfile::tempdir().unwrap();
        let cache = app_dir_in(base.path()).unwrap();
        let dir = snapshots_dir_in(&cache).unwrap();
        assert!(dir.exists());
        assert!(dir.starts_with(&cache));
        assert!(dir.ends_with("snapshots"));
    }

    #[test]
    fn test_app_config_path() {
        let base = tempfile::tempdir().unwrap();
        let config = app_dir_in(base.path()).unwrap();
        let path = app_config_path_in(&config);
        assert_eq!(path, config.join("config.toml"));
        assert!(!path.exists());
    }
}
