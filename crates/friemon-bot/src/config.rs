//! Configuration management for the Friemon bot
//!
//! Read from a TOML file (`config.toml` by default). The bot token may also
//! come from the `FRIEMON_TOKEN` environment variable, which wins over the file.

use anyhow::{bail, Context, Result};
use friemon::SpawnConfig;
use friemon_integration_discord::DiscordConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const TOKEN_ENV: &str = "FRIEMON_TOKEN";

/// Output format of log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Include file and line of the log call
    #[serde(default)]
    pub add_source: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            add_source: false,
        }
    }
}

/// Spawn section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnSection {
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

fn default_threshold() -> u32 {
    friemon::DEFAULT_SPAWN_THRESHOLD
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets/characters")
}

impl Default for SpawnSection {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl SpawnSection {
    pub fn engine_config(&self) -> SpawnConfig {
        SpawnConfig {
            threshold: self.threshold,
        }
    }
}

/// Bot Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub bot: DiscordConfig,
    #[serde(default)]
    pub spawn: SpawnSection,
}

impl Config {
    /// Load config from file and apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config = Self::parse(&content)?;

        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.bot.token = token;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse config text without touching the environment
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    pub fn validate(&self) -> Result<()> {
        if !self.bot.has_token() {
            bail!("No bot token configured (set bot.token or {})", TOKEN_ENV);
        }
        Ok(())
    }
}
