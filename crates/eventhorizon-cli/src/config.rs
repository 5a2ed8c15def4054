//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/eventhorizon/config.toml` by default:
//!
//! ```toml
//! debug = false
//!
//! [export]
//! uid_domain = "event-horizon.app"
//! max_description_length = 1500
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use eventhorizon_core::ExportConfig;

/// Smallest description budget that still fits the `...` marker.
const MIN_DESCRIPTION_LENGTH: usize = 3;

/// Configuration for the eventhorizon CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Export settings.
    pub export: ExportConfig,
}

impl CliConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventhorizon")
    }

    /// Checks the export settings.
    pub fn validate(&self) -> Result<(), String> {
        let export = &self.export;
        if export.uid_domain.trim().is_empty() {
            return Err("export.uid_domain must not be empty".to_string());
        }
        if export.prod_id.trim().is_empty() {
            return Err("export.prod_id must not be empty".to_string());
        }
        if export.max_description_length < MIN_DESCRIPTION_LENGTH {
            return Err(format!(
                "export.max_description_length must be at least {}",
                MIN_DESCRIPTION_LENGTH
            ));
        }
        if !export.google_base_url.starts_with("https://") {
            return Err("export.google_base_url must be an https URL".to_string());
        }
        Ok(())
    }
}
