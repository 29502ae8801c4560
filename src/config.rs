//! Configuration management for datekit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, LONG_DATE_FORMAT, SHORT_DATE_FORMAT, TIME_FORMAT};
use crate::utils::datetime;
use crate::utils::interval::FormattingMode;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for far-off dates in relative shorthand
    pub short_date_format: String,
    /// Date format for the long form
    pub long_date_format: String,
    /// Time format for clock times; `%p` renders as AM/PM
    pub time_format: String,
    /// Unit label style for "in ..." intervals
    /// Options: "short", "medium", "full"
    pub interval_mode: FormattingMode,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            short_date_format: SHORT_DATE_FORMAT.to_string(),
            long_date_format: LONG_DATE_FORMAT.to_string(),
            time_format: TIME_FORMAT.to_string(),
            interval_mode: FormattingMode::Medium,
        }
    }
}

impl DisplayConfig {
    /// Clock time of a moment using `time_format`
    pub fn format_time<Tz>(&self, moment: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        datetime::clock_time(moment, &self.time_format)
            .with_context(|| format!("Failed to render time_format '{}'", self.time_format))
    }

    /// Long form of a moment using `long_date_format`
    pub fn format_long_date<Tz>(&self, moment: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        datetime::format_moment(moment, &self.long_date_format)
            .with_context(|| format!("Failed to render long_date_format '{}'", self.long_date_format))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("datekit.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("datekit").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let formats = [
            ("short_date_format", &self.display.short_date_format),
            ("long_date_format", &self.display.long_date_format),
            ("time_format", &self.display.time_format),
        ];
        for (name, pattern) in formats {
            if pattern.is_empty() {
                anyhow::bail!("{} cannot be empty", name);
            }
            datetime::validate_format(pattern).with_context(|| format!("Invalid {}", name))?;
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Header shows what the default patterns render to today
        let now = chrono::Local::now();
        let header = format!(
            "# datekit configuration\n\
             # Patterns use chrono strftime syntax. With these defaults today renders as:\n\
             #   short_date_format -> {}\n\
             #   long_date_format  -> {}\n\
             #   time_format       -> {}\n\n",
            datetime::shorthand(&now),
            datetime::longhand(&now),
            config.display.format_time(&now)?
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("datekit"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
