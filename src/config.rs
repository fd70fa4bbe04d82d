//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::vitals::{Category, DayCount, PatientProfile, VitalsError};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Mock data generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Days per series; negative values are rejected
    #[serde(default = "default_days")]
    pub days: i64,

    /// Fixed seed for a reproducible dataset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Category shown on start (BODY or MIND)
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_days() -> i64 {
    DayCount::DEFAULT.get() as i64
}

fn default_category() -> String {
    Category::Body.as_str().to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            seed: None,
            category: default_category(),
        }
    }
}

impl GeneratorConfig {
    pub fn day_count(&self) -> Result<DayCount, VitalsError> {
        DayCount::from_signed(self.days)
    }

    pub fn initial_category(&self) -> Result<Category, VitalsError> {
        self.category.parse()
    }
}

/// Patient header
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,

    #[serde(default = "default_profile_age")]
    pub age: u32,
}

fn default_profile_name() -> String {
    PatientProfile::default().name
}

fn default_profile_age() -> u32 {
    PatientProfile::default().age
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            age: default_profile_age(),
        }
    }
}

impl From<&ProfileConfig> for PatientProfile {
    fn from(config: &ProfileConfig) -> Self {
        PatientProfile {
            name: config.name.clone(),
            age: config.age,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Default config locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("revivo").join("config.toml"));
        }
        paths.push(PathBuf::from("./revivo.toml"));
        paths
    }

    /// Load from default locations or environment
    ///
    /// Returns the file the config came from, if any.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file in `paths`, or fall back to the environment
    ///
    /// A file that exists but fails to read, parse or validate is an error;
    /// later paths are not tried.
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env()?, None)),
        }
    }

    /// Check values that TOML alone cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.day_count()?;
        self.generator.initial_category()?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `REVIVO_*` overrides from any variable source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(days) = lookup("REVIVO_DAYS") {
            self.generator.days = parse_env("REVIVO_DAYS", days)?;
        }
        if let Some(seed) = lookup("REVIVO_SEED") {
            self.generator.seed = Some(parse_env("REVIVO_SEED", seed)?);
        }
        if let Some(category) = lookup("REVIVO_CATEGORY") {
            self.generator.category = category;
        }

        if let Some(level) = lookup("REVIVO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("REVIVO_LOG_FORMAT") {
            self.logging.format = format;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Env { key, value })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    Env { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] VitalsError),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Revivo Configuration
#
# Environment variables override these settings:
# - REVIVO_DAYS
# - REVIVO_SEED
# - REVIVO_CATEGORY
# - REVIVO_LOG_LEVEL
# - REVIVO_LOG_FORMAT

[generator]
# Days of mock data per series
days = 14

# Fixed seed for a reproducible dataset (omit for a fresh one each run)
# seed = 42

# Category shown on start: BODY or MIND
category = "BODY"

[profile]
name = "John Doe"
age = 35

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
