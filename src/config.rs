//! Configuration handling for the TUI

use crate::state::View;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Event poll interval used when the config does not set one
const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// View shown at startup ("home" or "support")
    pub start_view: Option<String>,
    /// Event poll interval in milliseconds
    pub poll_interval_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "storefront", "storefront-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// True when a config file is present on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// The view to open at startup; unknown slugs fall back to home
    pub fn initial_view(&self) -> View {
        match self.start_view.as_deref() {
            None => View::default(),
            Some(slug) => View::from_slug(slug).unwrap_or_else(|| {
                tracing::warn!(slug, "unknown start_view in config, using home");
                View::default()
            }),
        }
    }

    /// How long the event loop waits for input before redrawing
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }
}
