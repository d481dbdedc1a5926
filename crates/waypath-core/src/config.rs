//! Navigator configuration
//!
//! Stored as TOML in `config.toml` under the platform config directory
//! (`~/.config/waypath/` on Linux). `WAYPATH_CONFIG_DIR` overrides the
//! directory; a missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{NavError, Result};

pub use types::{NavConfig, DEFAULT_MAP_FILE, DEFAULT_PRECISION};

const CONFIG_DIR: &str = "waypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYPATH_CONFIG_DIR";

/// Digits beyond this are noise for an `f64`
const MAX_PRECISION: usize = 17;

impl NavConfig {
    /// Location of the default configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| NavError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NavConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail_invalid!("precision", self.precision);
        }
        Ok(())
    }

    /// Load from `path` when given (must exist), otherwise from the default
    /// location, falling back to defaults when that file is absent.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The map file to load: explicit override, then config, then `map.json`
    pub fn resolve_map_file(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.map_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_FILE))
    }
}
