//! Configuration loaded from environment variables.
//!
//! Resolved once at process start; nothing here is re-read at runtime.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::models::ItineraryType;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the travel API, including the `/api` prefix
    pub api_url: String,
    /// Tried in order when `api_url` does not answer at startup
    pub api_fallback_urls: Vec<String>,
    pub api_timeout: Duration,
    /// Default itinerary day type for `custom` trips
    pub custom_trip_day_type: ItineraryType,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_url: "http://localhost:8001/api".to_string(),
            api_fallback_urls: Vec::new(),
            api_timeout: Duration::from_secs(10),
            custom_trip_day_type: ItineraryType::CruisePort,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let api_timeout = match lookup("TRAVEL_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        name: "TRAVEL_API_TIMEOUT_SECS",
                        value: raw.clone(),
                    }
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.api_timeout,
        };

        let custom_trip_day_type = match lookup("CUSTOM_TRIP_DAY_TYPE") {
            Some(raw) => ItineraryType::parse(&raw).ok_or(ConfigError::InvalidValue {
                name: "CUSTOM_TRIP_DAY_TYPE",
                value: raw,
            })?,
            None => defaults.custom_trip_day_type,
        };

        let api_fallback_urls = lookup("TRAVEL_API_FALLBACK_URLS")
            .map(|raw| {
                raw.split(',')
                    .map(normalize_base_url)
                    .filter(|u| !u.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            api_url: lookup("TRAVEL_API_URL")
                .map(|u| normalize_base_url(&u))
                .filter(|u| !u.is_empty())
                .unwrap_or(defaults.api_url),
            api_fallback_urls,
            api_timeout,
            custom_trip_day_type,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Trim whitespace and trailing slashes from a base URL
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
