//! Musique (track) model for Discotheque
//!
//! A musique always belongs to an artist and may be attached to an album
//! after creation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Musique record from the musiques table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Musique {
    /// Unique musique identifier
    pub id: i32,

    /// Track title
    pub title: String,

    /// Duration in seconds
    pub duree: i32,

    /// Album this track belongs to (none until attached)
    pub album_id: Option<i32>,

    /// Performing artist
    pub artist_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Musique {
    /// Returns the duration formatted as `m:ss` (or `h:mm:ss` past an hour)
    pub fn formatted_duree(&self) -> String {
        let total = self.duree.max(0);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

/// Musique creation input
#[derive(Debug, Clone)]
pub struct CreateMusique {
    pub title: String,
    pub duree: i32,
    pub album_id: Option<i32>,
    pub artist_id: i32,
}
