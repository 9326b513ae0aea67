//! Configuration management for Stabkit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default file lives in the platform configuration
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Extraction (which shapes become points, marker size, origin id)
//! - Machine (stab press heights, feed, home and sensor offsets)
//! - Output (diagnostic comments in the emitted program)
//!
//! Every section and field is optional in the file; missing values take
//! their defaults.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use stabkit_camtools::StabPressParameters;
use stabkit_designer::ExtractionOptions;
use std::path::{Path, PathBuf};

/// Name of the directory holding the default configuration file
const CONFIG_DIR_NAME: &str = "stabkit";

/// Name of the default configuration file
const CONFIG_FILE_NAME: &str = "config.toml";

/// What the emitted program contains besides motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Precede each stab with a comment naming its source shape
    pub debug: bool,
    /// Emit page size and orientation comments in the header
    pub diagnostics: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            debug: false,
            diagnostics: true,
        }
    }
}

/// Complete converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Extraction settings
    pub extraction: ExtractionOptions,
    /// Stab press parameters
    pub machine: StabPressParameters,
    /// Output settings
    pub output: OutputSettings,
}

enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the default configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "no configuration directory on this platform".to_string(),
                )
            })
    }

    /// Load the default configuration file, or the defaults if there is none
    pub fn load_default() -> SettingsResult<Self> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("{}; using built-in defaults", e);
                return Ok(Self::default());
            }
        };

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}; using built-in defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let threshold = self.extraction.marker_radius_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "extraction.marker_radius_threshold".to_string(),
                value: threshold.to_string(),
            }
            .into());
        }

        if self.extraction.origin_id.trim().is_empty() {
            return Err(ConfigError::MissingKey("extraction.origin_id".to_string()).into());
        }

        self.machine.validate()?;

        Ok(())
    }
}
