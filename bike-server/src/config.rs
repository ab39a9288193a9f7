//! Process configuration.
//!
//! Read once from the environment at startup and passed explicitly to
//! whatever needs it.

use std::net::SocketAddr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::provider::{DEFAULT_CONTRACT, ProviderConfig};

pub const API_URL_VAR: &str = "STATIONS_API_URL";
pub const API_KEY_VAR: &str = "STATIONS_API_KEY";
pub const CONTRACT_VAR: &str = "STATIONS_CONTRACT";
pub const TIMEOUT_VAR: &str = "STATIONS_TIMEOUT_SECS";
pub const CACHE_TTL_VAR: &str = "STATIONS_CACHE_TTL_SECS";
pub const LISTEN_ADDR_VAR: &str = "LISTEN_ADDR";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Variables that have no default.
pub const REQUIRED_VARIABLES: [&str; 2] = [API_URL_VAR, API_KEY_VAR];

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CACHE_TTL_SECS: u64 = 30;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} value is not valid unicode")]
    NotUnicode { name: &'static str },

    #[error("{name}={value:?} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub contract: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub listen_addr: SocketAddr,
    /// Tracing filter directive, e.g. `info` or `bike_server=debug`
    pub log_level: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { name }),
        })
    }

    /// Read configuration through `lookup`, which returns `Ok(None)` for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let var = |name: &'static str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(name)?.filter(|v| !v.trim().is_empty()))
        };
        let required = |name: &'static str| -> Result<String, ConfigError> {
            var(name)?.ok_or(ConfigError::Missing(name))
        };

        let api_url = required(API_URL_VAR)?;
        let api_key = required(API_KEY_VAR)?;
        let contract = var(CONTRACT_VAR)?.unwrap_or_else(|| DEFAULT_CONTRACT.to_string());
        let log_level = var(LOG_LEVEL_VAR)?.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let timeout_secs = parse_or(TIMEOUT_VAR, var(TIMEOUT_VAR)?, DEFAULT_TIMEOUT_SECS)?;
        let cache_ttl_secs = parse_or(CACHE_TTL_VAR, var(CACHE_TTL_VAR)?, DEFAULT_CACHE_TTL_SECS)?;
        let listen_addr = parse_or(
            LISTEN_ADDR_VAR,
            var(LISTEN_ADDR_VAR)?,
            SocketAddr::from(([127, 0, 0, 1], 3000)),
        )?;

        Ok(Self {
            api_url,
            api_key,
            contract,
            timeout_secs,
            cache_ttl_secs,
            listen_addr,
            log_level,
        })
    }

    /// Provider client settings.
    pub fn provider(&self) -> ProviderConfig {
        ProviderConfig::new(&self.api_url, &self.api_key)
            .with_timeout(self.timeout_secs)
    }

    /// Station cache settings.
    pub fn cache(&self) -> CacheConfig {
        CacheConfig::with_ttl(Duration::from_secs(self.cache_ttl_secs))
    }

    /// Log the effective configuration, without the API key.
    pub fn log(&self) {
        tracing::info!(
            api_url = %self.api_url,
            contract = %self.contract,
            timeout_secs = self.timeout_secs,
            cache_ttl_secs = self.cache_ttl_secs,
            listen_addr = %self.listen_addr,
            log_level = %self.log_level,
            "configuration loaded"
        );
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
