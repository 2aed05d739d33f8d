//! Configuration management for Partyamt.
//!
//! Loads configuration from ${PARTYAMT_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::card::{DEFAULT_CURRENCY_SUFFIX, Sentinels};

/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV: &str = "PARTYAMT_ENDPOINT";

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Partyamt configuration and log directories.
    //!
    //! PARTYAMT_HOME resolution order:
    //! 1. PARTYAMT_HOME environment variable (if set)
    //! 2. ~/.config/partyamt (default)
    //! 3. ./.partyamt when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Partyamt home directory.
    pub fn partyamt_home() -> PathBuf {
        if let Ok(home) = std::env::var("PARTYAMT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".partyamt"),
            |h| h.join(".config").join("partyamt"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        partyamt_home().join("config.toml")
    }

    /// Returns the directory holding dashboard log files.
    pub fn logs_dir() -> PathBuf {
        partyamt_home().join("logs")
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Appended to non-free prices.
    pub currency_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint URL
    pub endpoint: String,

    /// Tag names with special rendering meaning
    pub sentinels: Sentinels,

    /// Display preferences
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            sentinels: Sentinels::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    pub const DEFAULT_ENDPOINT: &str = "https://partyamt.carstens.tech/graphql";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Resolves the endpoint with precedence: flag > env > config > default.
    ///
    /// # Errors
    /// Returns an error if the winning value is not a valid URL.
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<String> {
        let env = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_endpoint_from(flag, env.as_deref())
    }

    fn resolve_endpoint_from(&self, flag: Option<&str>, env: Option<&str>) -> Result<String> {
        let candidates = [
            (flag, "--endpoint"),
            (env, ENDPOINT_ENV),
            (Some(self.endpoint.as_str()), "config endpoint"),
        ];

        for (value, source) in candidates {
            let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
                continue;
            };
            url::Url::parse(value)
                .with_context(|| format!("Invalid endpoint URL from {source}: {value}"))?;
            return Ok(value.to_string());
        }

        Ok(Self::DEFAULT_ENDPOINT.to_string())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
