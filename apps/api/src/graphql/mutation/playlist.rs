//! Playlist mutations for Discotheque GraphQL API
//!
//! - createPlaylist: Create a playlist owned by a user
//! - addMusiqueToPlaylist: Append a musique to a playlist

use async_graphql::{Context, InputObject, Object, Result};
use chrono::{DateTime, Utc};

use super::{required_text, MAX_DESCRIPTION_LENGTH};
use crate::error::{to_graphql_error, ApiError, ApiResult};
use crate::graphql::types::Playlist;
use crate::models::CreatePlaylist;
use crate::repositories::{PlaylistAppend, PlaylistRepository};

/// Input for creating a new playlist
#[derive(Debug, InputObject)]
pub struct CreatePlaylistInput {
    /// Playlist name (required)
    pub name: String,
    /// Playlist description (optional)
    pub description: Option<String>,
    /// User creating the playlist
    pub created_by_id: i32,
    /// Creation timestamp (defaults to now)
    pub created_at: Option<DateTime<Utc>>,
}

impl CreatePlaylistInput {
    fn validate(self) -> ApiResult<CreatePlaylist> {
        let name = required_text("Playlist name", &self.name)?;

        // Blank descriptions are stored as NULL
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if let Some(ref desc) = description {
            if desc.chars().count() > MAX_DESCRIPTION_LENGTH {
                return Err(ApiError::validation(format!(
                    "Playlist description cannot exceed {} characters",
                    MAX_DESCRIPTION_LENGTH
                )));
            }
        }

        Ok(CreatePlaylist {
            name,
            description,
            created_by_id: self.created_by_id,
            created_at: self.created_at,
        })
    }
}

/// Playlist mutations
#[derive(Default)]
pub struct PlaylistMutation;

#[Object]
impl PlaylistMutation {
    /// Create a new playlist
    ///
    /// # Errors
    /// - Returns error if validation fails
    /// - Returns error if the creating user does not exist
    async fn create_playlist(
        &self,
        ctx: &Context<'_>,
        input: CreatePlaylistInput,
    ) -> Result<Playlist> {
        let input = input.validate().map_err(to_graphql_error)?;
        let repo = ctx.data::<PlaylistRepository>()?;

        let playlist = repo
            .create(&input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        tracing::info!(
            playlist_id = playlist.id,
            created_by_id = playlist.created_by_id,
            name = %playlist.name,
            "Playlist created"
        );
        Ok(Playlist::from(playlist))
    }

    /// Append a musique to the end of a playlist
    ///
    /// Adding a musique that is already in the playlist leaves it unchanged.
    /// Returns the playlist.
    async fn add_musique_to_playlist(
        &self,
        ctx: &Context<'_>,
        playlist_id: i32,
        musique_id: i32,
    ) -> Result<Playlist> {
        let repo = ctx.data::<PlaylistRepository>()?;

        let outcome = repo
            .add_musique(playlist_id, musique_id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        match outcome {
            PlaylistAppend::Added(entry) => tracing::info!(
                playlist_id,
                musique_id,
                position = entry.position,
                "Musique added to playlist"
            ),
            PlaylistAppend::AlreadyPresent => {
                tracing::debug!(playlist_id, musique_id, "Musique already in playlist")
            }
            PlaylistAppend::PlaylistMissing => {
                return Err(to_graphql_error(ApiError::not_found("playlist", playlist_id)))
            }
        }

        let playlist = repo
            .find_by_id(playlist_id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?
            .ok_or_else(|| to_graphql_error(ApiError::not_found("playlist", playlist_id)))?;

        Ok(Playlist::from(playlist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn input(name: &str, description: Option<&str>) -> CreatePlaylistInput {
        CreatePlaylistInput {
            name: name.to_string(),
            description: description.map(str::to_string),
            created_by_id: 1,
            created_at: None,
        }
    }

    #[test]
    fn test_valid_playlist() {
        let playlist = input(" Rock Vibes ", Some("A collection of the best rock songs."))
            .validate()
            .unwrap();

        assert_eq!(playlist.name, "Rock Vibes");
        assert_eq!(
            playlist.description.as_deref(),
            Some("A collection of the best rock songs.")
        );
        assert!(playlist.created_at.is_none());
    }

    #[test]
    fn test_blank_description_becomes_none() {
        let playlist = input("Chill Pop", Some("   ")).validate().unwrap();
        assert!(playlist.description.is_none());
    }

    #[test]
    fn test_description_too_long() {
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert_matches!(
            input("80s Classics", Some(&long)).validate(),
            Err(ApiError::ValidationError(_))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_matches!(
            input("", None).validate(),
            Err(ApiError::ValidationError(ref msg)) if msg == "Playlist name cannot be empty"
        );
    }

    #[test]
    fn test_explicit_created_at_kept() {
        let at = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
        let mut playlist = input("Rock Vibes", None);
        playlist.created_at = Some(at);

        assert_eq!(playlist.validate().unwrap().created_at, Some(at));
    }
}
