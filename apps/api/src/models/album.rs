//! Album model for Discotheque

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Album record from the albums table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    /// Unique album identifier
    pub id: i32,

    /// Album title
    pub title: String,

    /// Artist who released this album
    pub artist_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Album creation input
#[derive(Debug, Clone)]
pub struct CreateAlbum {
    pub title: String,
    pub artist_id: i32,
}
