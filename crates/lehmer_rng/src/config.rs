//! Generator configuration management
//!
//! Handles loading configuration from TOML files and environment variables.

use std::path::Path;
use std::str::FromStr;

use lehmer_core::params::{DEFAULT_SEED, DEFAULT_STREAMS};
use lehmer_core::LehmerParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::StepFormula;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown step formula name
    #[error("Invalid step formula: {0}. Must be one of: modulo (mod), gamma (schrage), jump (stream initialisation only)")]
    InvalidFormula(String),

    /// Unknown parameter profile name
    #[error("Invalid parameter profile: {0}. Must be one of: standard, minimal")]
    InvalidProfile(String),

    /// Jump formula requested for advancement
    #[error("The jump formula cannot be used for advancement")]
    JumpFormula,

    /// Unreadable or malformed TOML
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Unparseable environment override
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Named parameter sets selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// `a = 48271`
    #[default]
    Standard,
    /// `a = 16807`
    Minimal,
}

impl Profile {
    /// Parameter set for this profile
    pub fn params(&self) -> LehmerParams {
        match self {
            Profile::Standard => LehmerParams::STANDARD,
            Profile::Minimal => LehmerParams::MINIMAL_STANDARD,
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Profile::Standard),
            "minimal" | "minimal_standard" => Ok(Profile::Minimal),
            _ => Err(ConfigError::InvalidProfile(s.to_string())),
        }
    }
}

/// Generator configuration structure
///
/// ```
/// use lehmer_rng::config::LehmerConfig;
/// use lehmer_rng::StepFormula;
///
/// let config = LehmerConfig::from_toml_str("streams = 16\nformula = \"gamma\"").unwrap();
/// assert_eq!(config.streams, 16);
/// assert_eq!(config.formula, StepFormula::Gamma);
/// assert_eq!(config.seed, 123_456_789);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LehmerConfig {
    /// Number of streams (0 selects the default)
    pub streams: usize,
    /// Root seed for stream initialisation
    pub seed: i64,
    /// Formula used for advancement
    pub formula: StepFormula,
    /// Stream selected after construction
    pub stream: usize,
    /// Parameter profile
    pub profile: Profile,
}

impl Default for LehmerConfig {
    fn default() -> Self {
        Self {
            streams: DEFAULT_STREAMS,
            seed: i64::from(DEFAULT_SEED),
            formula: StepFormula::Modulo,
            stream: 0,
            profile: Profile::Standard,
        }
    }
}

const ENV_STREAMS: &str = "LEHMER_STREAMS";
const ENV_SEED: &str = "LEHMER_SEED";
const ENV_FORMULA: &str = "LEHMER_FORMULA";
const ENV_STREAM: &str = "LEHMER_STREAM";
const ENV_PROFILE: &str = "LEHMER_PROFILE";

impl LehmerConfig {
    /// Create a new LehmerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LehmerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from a variable lookup (environment or test double)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_STREAMS) {
            self.streams = parse_env(ENV_STREAMS, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.seed = parse_env(ENV_SEED, &value)?;
        }
        if let Some(value) = lookup(ENV_FORMULA) {
            self.formula = StepFormula::from_str(&value)?;
        }
        if let Some(value) = lookup(ENV_STREAM) {
            self.stream = parse_env(ENV_STREAM, &value)?;
        }
        if let Some(value) = lookup(ENV_PROFILE) {
            self.profile = Profile::from_str(&value)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.formula.is_advancing() {
            return Err(ConfigError::JumpFormula);
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid number", key, value)))
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(config_file: Option<&Path>) -> Result<LehmerConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => LehmerConfig::from_file(path)?,
        None => LehmerConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;

    config.validate()?;
    Ok(config)
}
