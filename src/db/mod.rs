//! Database module
//!
//! This module handles database connections, schema setup, sample data and repositories.

pub mod connection;
pub mod repositories;
pub mod seed;

pub use connection::*;
