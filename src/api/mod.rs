//! Backend API module.
//!
//! This module handles:
//! - Wire types shared with the backend
//! - The `Backend` trait the view controller talks through
//! - The reqwest-based API client
//! - A mock backend for testing

use async_trait::async_trait;

use crate::error::ApiError;

pub mod client;
pub mod mock;
pub mod types;

pub use client::ApiClient;
pub use mock::{MockBackend, MockConfig};
pub use types::{HealthStatus, NewUser, User};

/// Operations the view controller needs from the backend.
///
/// Implemented by [`ApiClient`] over HTTP and by [`MockBackend`] in-memory.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the backend health snapshot.
    async fn fetch_health(&self) -> Result<HealthStatus, ApiError>;

    /// Fetch the full user roster.
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user; returns the record with its server-assigned id.
    async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError>;
}
