//! API configuration module.
//!
//! Configuration is loaded from environment variables (after an optional
//! `.env` file) with fallback to defaults.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What the registration handler does when address verification fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressCheckMode {
    /// Reject the registration with 400 and the verifier's message.
    #[default]
    Enforce,
    /// Log the failure and store the registration anyway.
    Advisory,
}

impl FromStr for AddressCheckMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enforce" => Ok(AddressCheckMode::Enforce),
            "advisory" => Ok(AddressCheckMode::Advisory),
            _ => Err(ConfigError::InvalidValue("ADDRESS_CHECK_MODE".to_string())),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port (default: 4568)
    pub port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Pool size
    pub database_max_connections: u32,

    /// ViaCEP base URL, without the `/{cep}/json/` suffix
    pub viacep_base_url: String,

    /// Upper bound on one CEP lookup
    pub cep_lookup_timeout: Duration,

    /// Enforce or merely log address verification failures
    pub address_check_mode: AddressCheckMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 4568,
            database_path: "./data/cadastro.db".to_string(),
            database_max_connections: 5,
            viacep_base_url: cadastro_address::viacep::DEFAULT_BASE_URL.to_string(),
            cep_lookup_timeout: cadastro_address::viacep::DEFAULT_TIMEOUT,
            address_check_mode: AddressCheckMode::Enforce,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: parse_or(&get, "PORT", defaults.port)?,

            database_path: get("DATABASE_PATH").unwrap_or(defaults.database_path),

            database_max_connections: parse_or(
                &get,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,

            viacep_base_url: get("VIACEP_BASE_URL").unwrap_or(defaults.viacep_base_url),

            cep_lookup_timeout: Duration::from_secs(parse_or(
                &get,
                "CEP_LOOKUP_TIMEOUT_SECS",
                defaults.cep_lookup_timeout.as_secs(),
            )?),

            address_check_mode: match get("ADDRESS_CHECK_MODE") {
                Some(raw) => raw.parse()?,
                None => defaults.address_check_mode,
            },
        };

        if config.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }
        if config.cep_lookup_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "CEP_LOOKUP_TIMEOUT_SECS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
