// crates/pokedex-config/src/config.rs
// ============================================================================
// Module: Pokedex Configuration
// Description: Configuration loading and validation for the Pokedex service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: pokedex-providers, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section has defaults, so an empty file is a valid configuration.
//! When no path is given and the default file does not exist, defaults are
//! used; an explicitly named file that is missing is an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use pokedex_providers::DEFAULT_MAX_RESPONSE_BYTES;
use pokedex_providers::DEFAULT_SPECIES_BASE_URL;
use pokedex_providers::DEFAULT_TIMEOUT_MS;
use pokedex_providers::DEFAULT_TRANSLATION_BASE_URL;
use pokedex_providers::DEFAULT_USER_AGENT;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "pokedex.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "POKEDEX_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default bind address for the HTTP endpoint.
pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Default maximum accepted name length.
pub(crate) const DEFAULT_MAX_NAME_LENGTH: usize = 128;
/// Largest allowed `max_name_length`.
pub(crate) const MAX_NAME_LENGTH_LIMIT: usize = 1024;
/// Minimum allowed upstream timeout in milliseconds.
pub(crate) const MIN_TIMEOUT_MS: u64 = 100;
/// Maximum allowed upstream timeout in milliseconds.
pub(crate) const MAX_TIMEOUT_MS: u64 = 60_000;
/// Maximum length of the outbound user agent.
pub(crate) const MAX_USER_AGENT_LENGTH: usize = 256;
/// Largest allowed upstream response size limit in bytes.
pub(crate) const MAX_RESPONSE_BYTES_LIMIT: usize = 16 * 1024 * 1024;
/// Default log filter directive.
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Pokedex service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokedexConfig {
    /// HTTP endpoint settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Species provider settings.
    #[serde(default)]
    pub species: UpstreamConfig,
    /// Translation provider settings.
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PokedexConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = match fs::read(&resolved) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                let mut config = Self::default();
                config.validate()?;
                return Ok(config);
            }
            Err(err) => {
                return Err(ConfigError::Io(format!("{}: {err}", resolved.display())));
            }
        };
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw TOML bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the payload is oversized, not UTF-8,
    /// unparsable, or invalid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.species.validate("species")?;
        self.translation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Server Config
// ============================================================================

/// HTTP endpoint configuration.
///
/// # Invariants
/// - `bind` parses as a socket address after validation.
/// - `max_name_length` is within `1..=1024`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Longest name accepted by the endpoint, in characters.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_name_length: default_max_name_length(),
        }
    }
}

impl ServerConfig {
    /// Returns the parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid bind address: {}", self.bind)))
    }

    /// Validates server configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.max_name_length == 0 || self.max_name_length > MAX_NAME_LENGTH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "server.max_name_length must be between 1 and {MAX_NAME_LENGTH_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Upstream Config
// ============================================================================

/// Outbound provider configuration shared by both upstreams.
///
/// # Invariants
/// - `base_url` starts with `http://` or `https://`.
/// - `timeout_ms` is within `100..=60000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Provider base URL.
    #[serde(default = "default_species_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// User agent for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum upstream response size in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_species_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl UpstreamConfig {
    /// Validates upstream settings; `section` names the table in messages.
    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "{section}.base_url must include http:// or https://"
            )));
        }
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(ConfigError::Invalid(format!(
                "{section}.timeout_ms must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"
            )));
        }
        let user_agent = self.user_agent.trim();
        if user_agent.is_empty() || user_agent.len() > MAX_USER_AGENT_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "{section}.user_agent must be 1 to {MAX_USER_AGENT_LENGTH} bytes"
            )));
        }
        if self.max_response_bytes == 0 || self.max_response_bytes > MAX_RESPONSE_BYTES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "{section}.max_response_bytes must be between 1 and {MAX_RESPONSE_BYTES_LIMIT}"
            )));
        }
        Ok(())
    }
}

/// Translation provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    /// Provider base URL.
    #[serde(default = "default_translation_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// User agent for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum upstream response size in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
    /// Optional API secret sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translation_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_response_bytes: default_max_response_bytes(),
            api_key: None,
        }
    }
}

impl TranslationConfig {
    /// Returns the transport settings shared with the species provider.
    #[must_use]
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
            user_agent: self.user_agent.clone(),
            max_response_bytes: self.max_response_bytes,
        }
    }

    /// Validates translation settings.
    fn validate(&mut self) -> Result<(), ConfigError> {
        self.upstream().validate("translation")?;
        if self.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            self.api_key = None;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Logging Config
// ============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable text lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Validates logging configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must be non-empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// The flag is true when the path was named explicitly.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Default bind address.
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Default maximum name length.
const fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

/// Default species provider base URL.
fn default_species_base_url() -> String {
    DEFAULT_SPECIES_BASE_URL.to_string()
}

/// Default translation provider base URL.
fn default_translation_base_url() -> String {
    DEFAULT_TRANSLATION_BASE_URL.to_string()
}

/// Default upstream timeout.
const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Default outbound user agent.
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Default upstream response size limit.
const fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

/// Default log filter.
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
