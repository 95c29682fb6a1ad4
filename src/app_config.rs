use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::scansion::ScansionConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to a CMU-format pronunciation lexicon, optional
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Output options
    #[serde(default)]
    pub output: OutputConfig,

    /// Analysis options
    #[serde(default)]
    pub analysis: ScansionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output format for analysis results
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Human-readable text table
    #[default]
    Text,
    // @format: Serialized PoemAnalysis
    Json,
}

impl OutputFormat {
    // @returns: Lowercase format identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Json => "json".to_string(),
        }
    }
}

// Implement Display trait for OutputFormat
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for OutputFormat
impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    // @field: Output format
    #[serde(default)]
    pub format: OutputFormat,

    // @field: Include foot labels in text output
    #[serde(default = "default_true")]
    pub show_feet: bool,

    // @field: Include per-syllable breakdowns in text output
    #[serde(default = "default_true")]
    pub show_syllables: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            show_feet: default_true(),
            show_syllables: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to log crate LevelFilter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lexicon_path: None,
            output: OutputConfig::default(),
            analysis: ScansionConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Create a default config file if none exists, then load it
    pub fn ensure_config_exists<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Config::default();
            config.save_to_file(path)?;
            log::info!("Created default configuration at {}", path.display());
            return Ok(config);
        }
        Self::from_file(path)
    }

    /// Validate configuration values.
    ///
    /// A missing lexicon file is a warning, not an error - the engine
    /// degrades to heuristic stress resolution.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.lexicon_path {
            if !path.exists() {
                log::warn!(
                    "Configured lexicon does not exist: {} (heuristics will be used)",
                    path.display()
                );
            }
        }
        Ok(())
    }
}
