//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the backend REST API (e.g., `http://localhost:5000/api`).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Idle connections kept per host.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_http_timeout_ms() -> u64 {
    5000
}

fn default_http_pool_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("API_BASE_URL must not be empty".to_string());
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err("API_BASE_URL must start with http:// or https://".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the base URL without a trailing slash.
    pub fn api_base_url_trimmed(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            http_timeout_ms: default_http_timeout_ms(),
            http_pool_size: default_http_pool_size(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_api_base_url(), "http://localhost:5000/api");
        assert_eq!(default_http_timeout_ms(), 5000);
        assert_eq!(default_http_pool_size(), 10);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let config = Config {
            api_base_url: String::new(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let config = Config {
            api_base_url: "ftp://localhost:5000/api".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = Config {
            api_base_url: "http://localhost:5000/api/".to_string(),
            ..Config::default()
        };

        assert_eq!(config.api_base_url_trimmed(), "http://localhost:5000/api");
    }
}
