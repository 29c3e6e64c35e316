//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including lazily connected pools, schema builders, and helpers for
//! executing GraphQL documents.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
