use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid LOG_LEVEL: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub rest_countries_url: String,
    pub request_timeout: Option<Duration>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            rest_countries_url: DEFAULT_REST_COUNTRIES_URL.to_string(),
            request_timeout: None,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup. Unparseable numbers
    /// fall back to their defaults; an unknown log level is an error.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            server_port: var("SERVER_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            rest_countries_url: var("REST_COUNTRIES_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_REST_COUNTRIES_URL.to_string()),
            request_timeout: var("REQUEST_TIMEOUT_SECS")
                .and_then(|secs| secs.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            log_level: log_level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(log_level.clone()))?,
        })
    }
}
