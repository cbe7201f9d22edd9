//! Authentication response DTOs

use serde::Serialize;

/// Issued bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Logout confirmation
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub detail: String,
}
