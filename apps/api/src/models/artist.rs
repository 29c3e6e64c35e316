//! Artist model for Discotheque

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Artist record from the artists table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    /// Unique artist identifier
    pub id: i32,

    /// Artist name
    pub name: String,

    /// Genre tags
    pub genres: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Artist creation input
#[derive(Debug, Clone)]
pub struct CreateArtist {
    pub name: String,
    pub genres: Vec<String>,
}

impl CreateArtist {
    pub fn new(name: impl Into<String>, genres: &[&str]) -> Self {
        Self {
            name: name.into(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_serialization() {
        let artist = Artist {
            id: 1,
            name: "Arctic Monkeys".to_string(),
            genres: vec!["Indie Rock".to_string(), "Alternative".to_string()],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&artist).expect("serialization should succeed");
        assert!(json.contains("Arctic Monkeys"));
        assert!(json.contains("Indie Rock"));
    }

    #[test]
    fn test_create_artist_new() {
        let input = CreateArtist::new("Adele", &["Pop", "Soul"]);
        assert_eq!(input.name, "Adele");
        assert_eq!(input.genres, vec!["Pop", "Soul"]);
    }
}
