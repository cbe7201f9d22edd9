//! Utility functions

pub mod crypto;
pub mod validation;

pub use crypto::{generate_token, secrets_match};
pub use validation::validate_class_level;
