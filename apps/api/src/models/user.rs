//! User model for Discotheque

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// User record from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: i32,

    /// Unique display handle
    pub username: String,

    /// Unique email address (stored lower-cased)
    pub email: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// User creation input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
}
