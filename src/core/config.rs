//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.contacts/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Phone book used when no file is given on the command line.
    pub default_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "contacts.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means an in-memory session that is never saved.
    pub phone_book: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.contacts/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".contacts").join("config.toml"))
}

/// Load config from `~/.contacts/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ContactsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ContactsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ContactsConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ContactsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ContactsConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: ContactsConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Contacts Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_file = "phonebook.db"     # Or set CONTACTS_FILE env var

# [logging]
# file = "contacts.log"             # Or set CONTACTS_LOG_FILE env var
# level = "debug"                   # "error", "warn", "info", "debug", "trace", "off"
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

/// Command-line values; `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub phone_book: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ContactsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ContactsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Phone book: CLI → env → config → none
    let phone_book = cli
        .phone_book
        .clone()
        .or_else(|| env("CONTACTS_FILE").map(PathBuf::from))
        .or_else(|| config.general.default_file.as_ref().map(PathBuf::from));

    // Log file: env → config → default
    let log_file = env("CONTACTS_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("CONTACTS_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        phone_book,
        log_file: PathBuf::from(log_file),
        log_level,
    }
}
