//! Configuration system
//!
//! Provides centralized configuration management with:
//! - Environment variable support
//! - Config file loading (optional)
//! - Runtime defaults
//! - Validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];
const LOG_OUTPUTS: [&str; 3] = ["console", "file", "both"];
const MAX_SECONDS_PRECISION: usize = 6;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Report output configuration
    pub output: OutputConfig,

    /// Paths configuration
    pub paths: PathsConfig,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

/// Ordering of users in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Seconds,
    Sessions,
}

impl std::str::FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "seconds" => Ok(SortKey::Seconds),
            "sessions" => Ok(SortKey::Sessions),
            other => anyhow::bail!("Unknown sort key: {}", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
    pub json_pretty: bool,
    pub sort_by: SortKey,
    pub seconds_precision: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "WARN".to_string(),
            format: "pretty".to_string(),
            output: "console".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            json_pretty: true,
            sort_by: SortKey::Name,
            seconds_precision: 0,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Not validated here: callers apply their own overrides first, then call
    /// [`Config::validate`].
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Candidate config files, first match wins
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("fair-billing.toml"),
            PathBuf::from(".fair-billing.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("fair-billing").join("config.toml"));
        }
        paths
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // Logging overrides
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        // Output overrides
        if let Ok(val) = env::var("FAIR_BILLING_JSON") {
            self.output.json = val.parse().context("Invalid FAIR_BILLING_JSON")?;
        }
        if let Ok(val) = env::var("FAIR_BILLING_SORT_BY") {
            self.output.sort_by = val.parse().context("Invalid FAIR_BILLING_SORT_BY")?;
        }
        if let Ok(val) = env::var("FAIR_BILLING_PRECISION") {
            self.output.seconds_precision =
                val.parse().context("Invalid FAIR_BILLING_PRECISION")?;
        }

        // Path overrides
        if let Ok(val) = env::var("FAIR_BILLING_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Log format must be one of {:?}, got {}",
                LOG_FORMATS,
                self.logging.format
            ));
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            return Err(anyhow::anyhow!(
                "Log output must be one of {:?}, got {}",
                LOG_OUTPUTS,
                self.logging.output
            ));
        }

        if self.output.seconds_precision > MAX_SECONDS_PRECISION {
            return Err(anyhow::anyhow!(
                "Seconds precision must be at most {}, got {}",
                MAX_SECONDS_PRECISION,
                self.output.seconds_precision
            ));
        }

        // Only file output needs the log directory
        if self.logging.output != "console" && !self.paths.log_directory.exists() {
            fs::create_dir_all(&self.paths.log_directory)
                .context("Failed to create log directory")?;
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved to file");

        Ok(())
    }
}
