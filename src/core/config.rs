//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.funfacts/config.toml`. The file is optional and is
//! never written by the program.

use log::LevelFilter;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct FunFactsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// "off", "error", "warn", "info", "debug" or "trace".
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random";
pub const DEFAULT_LOG_FILE: &str = "funfacts.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint_url: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values coming from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.funfacts/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".funfacts").join("config.toml"))
}

/// Load config from `~/.funfacts/config.toml`.
///
/// Runs before the logger exists, so nothing here logs.
pub fn load_config() -> Result<FunFactsConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(FunFactsConfig::default()),
    }
}

/// A missing file yields defaults; a malformed one is an error.
pub fn load_config_from(path: &Path) -> Result<FunFactsConfig, ConfigError> {
    if !path.exists() {
        return Ok(FunFactsConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FunFactsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FunFactsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint_url = cli
        .endpoint_url
        .clone()
        .or_else(|| env("FUNFACTS_URL"))
        .or_else(|| config.general.endpoint_url.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

    // Log level: env → config → default. Unparseable values fall back.
    let log_level = env("FUNFACTS_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        endpoint_url,
        log_level,
        log_file,
    }
}
