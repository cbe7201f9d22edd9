//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{config::Config, services::AuthService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: SqlitePool,

    /// Admin gate holding the valid-token set
    pub auth: AuthService,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state with an empty token set
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let auth = AuthService::new(config.auth.admin_password.clone());
        Self {
            inner: Arc::new(AppStateInner { db, auth, config }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get a reference to the admin gate
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
