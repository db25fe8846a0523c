//! Configuration loading and catalogue path resolution
//!
//! Bootstrap settings come from a small TOML file. A missing file is not an
//! error: a warning is logged and built-in defaults are used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "VIDCAT_CONFIG";

/// Environment variable naming the catalogue file
pub const CATALOGUE_ENV_VAR: &str = "VIDCAT_CATALOGUE";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    /// Catalogue file (relative or absolute)
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,

    /// Seed for random playback (entropy when absent)
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "invalid log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Config file resolution:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. OS-dependent config directory
pub fn resolve_config_path(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Priority 3: OS-dependent default
    default_config_path()
}

/// Catalogue file resolution:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_catalogue_path(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CATALOGUE_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.catalogue_path {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_catalogue_path()
}

/// Get default configuration file path for the platform
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("vidcat").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("./vidcat.toml"))
}

/// Get OS-dependent default catalogue path
fn default_catalogue_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("vidcat").join("videos.toml"))
        .unwrap_or_else(|| PathBuf::from("./videos.toml"))
}
