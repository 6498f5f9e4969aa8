//! Application configuration
//!
//! Configuration loaded from .tw-palette.toml file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from .tw-palette.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Plugins offered in the "Plugins" submenu, in display order
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,

    /// Tailwind version recorded with every synced snapshot
    #[serde(default = "default_tailwind_version")]
    pub tailwind_version: String,

    /// Directory for synced snapshots (defaults to the cache directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<String>,

    /// Label of the root level of the command palette
    #[serde(default = "default_palette_title")]
    pub palette_title: String,
}

fn default_plugins() -> Vec<String> {
    [
        "@tailwindcss/typography",
        "@tailwindcss/forms",
        "@tailwindcss/line-clamp",
        "@tailwindcss/aspect-ratio",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_tailwind_version() -> String {
    "3".to_string()
}

fn default_palette_title() -> String {
    "Home".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            tailwind_version: default_tailwind_version(),
            snapshot_dir: None,
            palette_title: default_palette_title(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Resolve where snapshots are stored
    pub fn snapshot_path(&self) -> anyhow::Result<PathBuf> {
        match &self.snapshot_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => crate::paths::snapshots_dir(),
        }
    }
}
