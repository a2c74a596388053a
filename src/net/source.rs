//! Data-source abstraction over the live API and the demo dataset.
//!
//! DESIGN
//! ======
//! Loaders and the login flow only see `dyn DataSource`, so the HTTP client
//! and the fixed demo dataset are interchangeable and tests can substitute a
//! stub. Futures are `?Send`: browser fetches are single-threaded.

use std::sync::Arc;

use super::api::ApiSource;
use super::demo::DemoSource;
use super::types::{ApiError, AuthUser, Credentials, Health, Project, Task, User};
use crate::config::{ClientConfig, DataSourceKind};

/// Provider of users, projects, tasks, and authentication.
#[async_trait::async_trait(?Send)]
pub trait DataSource: Send + Sync {
    /// Authenticate with email + password.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the credentials are rejected.
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the collection cannot be fetched.
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the collection cannot be fetched.
    async fn projects(&self) -> Result<Vec<Project>, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the collection cannot be fetched.
    async fn tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Liveness probe.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the backend is unreachable or unhealthy.
    async fn health(&self) -> Result<Health, ApiError>;
}

/// Build the data source selected by `config`.
pub fn source_for(config: &ClientConfig) -> Arc<dyn DataSource> {
    match config.data_source {
        DataSourceKind::Api => Arc::new(ApiSource::new(&config.api_base)),
        DataSourceKind::Demo => Arc::new(DemoSource),
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
