use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use bigdecimal::{BigDecimal, Zero};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://10.87.64.155:3000/api";
pub const DEFAULT_SESSION_FILE: &str = ".ordering-session.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_QUANTITY_KG: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub request_timeout: Duration,
    pub max_quantity_kg: BigDecimal,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_quantity_kg: BigDecimal::from(DEFAULT_MAX_QUANTITY_KG),
        }
    }
}

impl ClientConfig {
    /// Read `ORDERING_*` variables from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout = match var("ORDERING_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    key: "ORDERING_HTTP_TIMEOUT_SECS",
                    expected: "a positive number of seconds",
                    value: raw,
                })?,
            None => defaults.request_timeout,
        };

        let max_quantity_kg = match var("ORDERING_MAX_QUANTITY_KG") {
            Some(raw) => BigDecimal::from_str(raw.trim())
                .ok()
                .filter(|kg| *kg > BigDecimal::zero())
                .ok_or(ConfigError::InvalidValue {
                    key: "ORDERING_MAX_QUANTITY_KG",
                    expected: "a positive decimal",
                    value: raw,
                })?,
            None => defaults.max_quantity_kg,
        };

        Ok(Self {
            api_base_url: var("ORDERING_API_BASE_URL").unwrap_or(defaults.api_base_url),
            session_file: var("ORDERING_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            request_timeout,
            max_quantity_kg,
        })
    }
}
