//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.teletipo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::news::http::{DEFAULT_BASE_URL, Timeouts};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TeletipoConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
    pub summarize_timeout_secs: Option<u64>,
    pub summarize_one_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RevealConfig {
    pub tick_interval_ms: Option<u64>,
    pub excerpt_paragraphs: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 15;
pub const DEFAULT_EXCERPT_PARAGRAPHS: usize = 3;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeouts: Timeouts,
    pub tick_interval: Duration,
    pub excerpt_paragraphs: usize,
}

/// Flags given on the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub tick_ms: Option<u64>,
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

/// Returns the path to `~/.teletipo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".teletipo").join("config.toml"))
}

/// Load config from `~/.teletipo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TeletipoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TeletipoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TeletipoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TeletipoConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<TeletipoConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TeletipoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Teletipo Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://127.0.0.1:8000"   # Or set TELETIPO_BASE_URL
# fetch_timeout_secs = 15
# summarize_timeout_secs = 60          # Batch summaries
# summarize_one_timeout_secs = 30

# [reveal]
# tick_interval_ms = 15                # Per character; smaller = faster. Or TELETIPO_TICK_MS
# excerpt_paragraphs = 3               # Shown before an article is summarized
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TeletipoConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TELETIPO_BASE_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Tick interval: CLI → env → config → default
    let tick_ms = cli
        .tick_ms
        .or_else(|| env_u64("TELETIPO_TICK_MS"))
        .or(config.reveal.tick_interval_ms)
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

    let defaults = Timeouts::default();
    let timeouts = Timeouts {
        fetch: secs_or(config.server.fetch_timeout_secs, defaults.fetch),
        summarize_batch: secs_or(config.server.summarize_timeout_secs, defaults.summarize_batch),
        summarize_one: secs_or(config.server.summarize_one_timeout_secs, defaults.summarize_one),
    };

    ResolvedConfig {
        base_url,
        timeouts,
        tick_interval: Duration::from_millis(tick_ms),
        excerpt_paragraphs: config
            .reveal
            .excerpt_paragraphs
            .unwrap_or(DEFAULT_EXCERPT_PARAGRAPHS),
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

fn secs_or(value: Option<u64>, default: Duration) -> Duration {
    value.map(Duration::from_secs).unwrap_or(default)
}
