//! Playlist models for Discotheque
//!
//! Playlists belong to the user who created them and hold an ordered set
//! of musiques through the playlist_musiques join table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Playlist record from the playlists table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: i32,

    /// Playlist name
    pub name: String,

    /// Playlist description
    pub description: Option<String>,

    /// User who created this playlist
    pub created_by_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Playlist membership from the playlist_musiques table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistMusique {
    /// Playlist holding the musique
    pub playlist_id: i32,

    /// Musique in the playlist
    pub musique_id: i32,

    /// Position in playlist (0-indexed)
    pub position: i32,

    /// When the musique was added
    pub added_at: DateTime<Utc>,
}

/// Playlist creation input
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: Option<String>,
    pub created_by_id: i32,
    /// Explicit creation time; defaults to now when absent
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_playlist_serialization() {
        let playlist = Playlist {
            id: 1,
            name: "Rock Vibes".to_string(),
            description: Some("A collection of the best rock songs.".to_string()),
            created_by_id: 1,
            created_at: Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&playlist).expect("serialization should succeed");
        assert!(json.contains("Rock Vibes"));
        assert!(json.contains("2024-10-01T00:00:00Z"));
    }

    #[test]
    fn test_playlist_without_description() {
        let playlist = Playlist {
            id: 3,
            name: "80s Classics".to_string(),
            description: None,
            created_by_id: 2,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&playlist).expect("serialization should succeed");
        assert!(json.contains("\"description\":null"));
    }
}
