//! HTTP middleware

pub mod auth;

pub use auth::{AdminToken, auth_middleware};
