//! Mock backend for unit testing.
//!
//! This module provides a mock backend that can be used in tests
//! without making real network requests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::ApiError;

use super::types::{HealthStatus, NewUser, User};
use super::Backend;

/// Configuration for mock backend behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether to fail health requests.
    pub fail_health: bool,
    /// Whether to fail user list requests.
    pub fail_users: bool,
    /// Whether to fail user creation requests.
    pub fail_create: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock backend for testing.
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Mock configuration.
    config: MockConfig,
    /// Reported health status.
    status: String,
    /// Reported health timestamp.
    timestamp: String,
    /// In-memory user roster.
    users: Arc<Mutex<Vec<User>>>,
    /// Next id to assign on create.
    next_id: Arc<AtomicI64>,
}

impl MockBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a mock backend with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            users: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Set the reported health status and timestamp.
    pub fn set_health(&mut self, status: impl Into<String>, timestamp: impl Into<String>) {
        self.status = status.into();
        self.timestamp = timestamp.into();
    }

    /// Seed an existing user, advancing the id counter past it.
    pub fn seed_user(&self, user: User) {
        let mut users = self.users.lock().unwrap();
        self.next_id.fetch_max(user.id + 1, Ordering::SeqCst);
        users.push(user);
    }

    /// Number of users currently stored.
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Clear all stored users.
    pub fn clear(&self) {
        self.users.lock().unwrap().clear();
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch_health(&self) -> Result<HealthStatus, ApiError> {
        self.simulate_latency().await;

        if self.config.fail_health {
            return Err(ApiError::RequestFailed {
                endpoint: "/health".to_string(),
                reason: "mock health failure".to_string(),
            });
        }

        Ok(HealthStatus {
            status: self.status.clone(),
            timestamp: self.timestamp.clone(),
        })
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.simulate_latency().await;

        if self.config.fail_users {
            return Err(ApiError::RequestFailed {
                endpoint: "/users".to_string(),
                reason: "mock users failure".to_string(),
            });
        }

        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.simulate_latency().await;

        if self.config.fail_create {
            return Err(ApiError::RequestFailed {
                endpoint: "/users".to_string(),
                reason: "mock create failure".to_string(),
            });
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        };

        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}
