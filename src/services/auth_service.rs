//! Authentication service
//!
//! A single shared admin password gates issuance of opaque bearer tokens.
//! Issued tokens live in memory only and never expire on their own.

use std::sync::Arc;

use dashmap::DashSet;

use crate::{
    error::{AppError, AppResult},
    utils::{generate_token, secrets_match},
};

/// Admin gate owning the set of currently valid tokens
#[derive(Clone)]
pub struct AuthService {
    admin_password: Arc<str>,
    tokens: Arc<DashSet<String>>,
}

impl AuthService {
    /// Create a gate with an empty token set
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            admin_password: Arc::from(admin_password.into()),
            tokens: Arc::new(DashSet::new()),
        }
    }

    /// Exchange the admin password for a fresh token
    pub fn login(&self, password: &str) -> AppResult<String> {
        if password.is_empty() || !secrets_match(password, &self.admin_password) {
            tracing::info!("Admin login rejected");
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        let token = generate_token();
        self.tokens.insert(token.clone());

        tracing::info!(active_tokens = self.active_tokens(), "Admin logged in");
        Ok(token)
    }

    /// Invalidate a token. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        if self.tokens.remove(token).is_some() {
            tracing::info!(active_tokens = self.active_tokens(), "Admin logged out");
        }
    }

    /// Check that a token is currently valid
    pub fn verify(&self, token: &str) -> AppResult<()> {
        if self.tokens.contains(token) {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Invalid or expired token".to_string()))
        }
    }

    /// Number of currently valid tokens
    pub fn active_tokens(&self) -> usize {
        self.tokens.len()
    }
}
