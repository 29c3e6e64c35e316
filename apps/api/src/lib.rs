//! Discotheque API library
//!
//! This module exposes the core API components for use by the server and
//! seed binaries, and by integration tests.

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
