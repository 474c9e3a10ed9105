//! Unified error types for the dashboard client.

use thiserror::Error;

/// Unified error type for the dashboard client.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Backend API error.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend API request errors.
///
/// Transport failures and non-success HTTP statuses are both terminal for
/// a single request; callers handle every variant the same way.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request to {endpoint} failed: {reason}")]
    RequestFailed {
        /// The endpoint path that failed.
        endpoint: String,
        /// Reason for failure (HTTP status line).
        reason: String,
    },

    /// Network-level failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("failed to parse response body: {0}")]
    Parse(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, DashboardError>;
