//! GraphQL mutations for Discotheque
//!
//! Mutations are grouped by domain:
//! - library: artists, albums, musiques
//! - playlist: playlists and their contents
//! - user: user accounts

mod library;
mod playlist;
mod user;

pub use library::{CreateAlbumInput, CreateArtistInput, CreateMusiqueInput, LibraryMutation};
pub use playlist::{CreatePlaylistInput, PlaylistMutation};
pub use user::{CreateUserInput, UserMutation};

use async_graphql::MergedObject;

use crate::error::{ApiError, ApiResult};

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(LibraryMutation, PlaylistMutation, UserMutation);

// =============================================================================
// Input Validation Limits
// =============================================================================

/// Maximum length of names and titles
pub(crate) const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a playlist description
pub(crate) const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Trim a required text field and check it against the length limit
pub(crate) fn required_text(label: &str, value: &str) -> ApiResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::validation(format!("{} cannot be empty", label)));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ApiError::validation(format!(
            "{} cannot exceed {} characters",
            label, MAX_NAME_LENGTH
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("Name", "  Adele \n").unwrap(), "Adele");
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("Name", "   ").unwrap_err();
        assert_matches!(err, ApiError::ValidationError(ref msg) if msg == "Name cannot be empty");
    }

    #[test]
    fn test_required_text_counts_characters() {
        let accented = "é".repeat(MAX_NAME_LENGTH);
        assert!(required_text("Title", &accented).is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_matches!(
            required_text("Title", &too_long),
            Err(ApiError::ValidationError(_))
        );
    }
}
