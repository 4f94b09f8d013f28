//! Configuration management for the skip size picker
//!
//! Config stored at: ~/.config/skipsize/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use skipsize_domain::model::location::{DEFAULT_AREA, DEFAULT_POSTCODE};
use skipsize_domain::model::Location;
use skipsize_infra::DEFAULT_API_BASE_URL;
use skipsize_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the size API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_postcode")]
    pub postcode: String,

    #[serde(default = "default_area")]
    pub area: String,

    /// Offline JSON catalogue; used instead of the API when set
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_postcode() -> String {
    DEFAULT_POSTCODE.to_string()
}

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            postcode: default_postcode(),
            area: default_area(),
            catalogue_path: None,
            timeout_secs: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("skipsize");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn location(&self) -> Location {
        Location::new(self.postcode.clone(), self.area.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Parse and apply a timeout given as text. `0` clears it.
    pub fn set_timeout(&mut self, value: &str) -> Result<()> {
        let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: "timeout_secs".to_string(),
            value: value.to_string(),
        })?;
        self.timeout_secs = (secs > 0).then_some(secs);
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Skip Size Picker Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(f, "API URL:        {}", self.api_base_url)?;
        writeln!(f, "Postcode:       {}", self.postcode)?;
        writeln!(f, "Area:           {}", self.area)?;
        writeln!(
            f,
            "Catalogue:      {}",
            self.catalogue_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(remote API)".to_string())
        )?;
        writeln!(
            f,
            "Timeout:        {}",
            self.timeout_secs
                .map(|s| format!("{}s", s))
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
