//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Public API version reported by `/health` and `/`
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by `/`
pub const SERVICE_NAME: &str = "PREHSG Contest Hub API";

/// Origins allowed by CORS when `CORS_ALLOWED_ORIGINS` is unset
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://contest_hub.db";

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Admin password used when `ADMIN_PASSWORD` is unset
pub const DEFAULT_ADMIN_PASSWORD: &str = "chtcoder@prehsg";

/// Number of random bytes in an issued bearer token
pub const TOKEN_BYTES: usize = 32;

/// Authorization scheme prefix
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// CONTEST FIELD RANGES
// =============================================================================

pub const MIN_CLASS_LEVEL: i32 = 9;
pub const MAX_CLASS_LEVEL: i32 = 12;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

pub const MIN_PRE_NUMBER: i32 = 1;
pub const MAX_PRE_NUMBER: i32 = 3;
