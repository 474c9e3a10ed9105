//! Reqwest-based client for the user API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::ApiError;

use super::types::{HealthStatus, NewUser, User};
use super::Backend;

/// HTTP client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL of the API, without trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(500))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.api_base_url_trimmed().to_string(),
        }
    }

    /// Get the HTTP client reference.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed {
                endpoint: path.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }
}

#[async_trait]
impl Backend for ApiClient {
    /// GET `/health`.
    #[instrument(skip(self))]
    async fn fetch_health(&self) -> Result<HealthStatus, ApiError> {
        let health: HealthStatus = self.get_json("/health").await?;
        debug!(status = %health.status, "health check completed");
        Ok(health)
    }

    /// GET `/users`.
    #[instrument(skip(self))]
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let users: Vec<User> = self.get_json("/users").await?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    /// POST `/users`.
    #[instrument(skip(self, new_user), fields(name = %new_user.name))]
    async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.url("/users"))
            .json(new_user)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed {
                endpoint: "/users".to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let user: User = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("/users: {e}")))?;

        debug!(id = user.id, "user created");
        Ok(user)
    }
}
