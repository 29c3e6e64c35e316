//! Library mutations for Discotheque GraphQL API
//!
//! - createArtist: Register a new artist with its genres
//! - createAlbum: Create an album for an existing artist
//! - createMusique: Create a musique, optionally inside an album
//! - addMusiqueToAlbum: Move an existing musique into an album

use async_graphql::{Context, InputObject, Object, Result};

use super::required_text;
use crate::error::{to_graphql_error, ApiError, ApiResult};
use crate::graphql::types::{Album, Artist, Musique};
use crate::models::{CreateAlbum, CreateArtist, CreateMusique};
use crate::repositories::{AlbumRepository, ArtistRepository, MusiqueRepository};

/// Maximum number of genres attached to one artist
const MAX_GENRES: usize = 20;

// =============================================================================
// Input Types
// =============================================================================

/// Input for creating a new artist
#[derive(Debug, InputObject)]
pub struct CreateArtistInput {
    /// Artist name (required)
    pub name: String,
    /// Genres the artist plays
    #[graphql(default)]
    pub genres: Vec<String>,
}

impl CreateArtistInput {
    /// Normalize the input: trimmed name, trimmed genres without blanks or duplicates
    fn validate(self) -> ApiResult<CreateArtist> {
        let name = required_text("Artist name", &self.name)?;

        let mut genres: Vec<String> = Vec::with_capacity(self.genres.len());
        for genre in self.genres {
            let genre = genre.trim();
            let folded = genre.to_lowercase();
            if genre.is_empty() || genres.iter().any(|g| g.to_lowercase() == folded) {
                continue;
            }
            genres.push(required_text("Genre", genre)?);
        }

        if genres.len() > MAX_GENRES {
            return Err(ApiError::validation(format!(
                "An artist cannot have more than {} genres",
                MAX_GENRES
            )));
        }

        Ok(CreateArtist { name, genres })
    }
}

/// Input for creating a new album
#[derive(Debug, InputObject)]
pub struct CreateAlbumInput {
    /// Album title (required)
    pub title: String,
    /// Artist who released the album
    pub artist_id: i32,
}

impl CreateAlbumInput {
    fn validate(self) -> ApiResult<CreateAlbum> {
        Ok(CreateAlbum {
            title: required_text("Album title", &self.title)?,
            artist_id: self.artist_id,
        })
    }
}

/// Input for creating a new musique
#[derive(Debug, InputObject)]
pub struct CreateMusiqueInput {
    /// Musique title (required)
    pub title: String,
    /// Duration in seconds
    pub duree: i32,
    /// Performing artist
    pub artist_id: i32,
    /// Album the musique belongs to (optional)
    pub album_id: Option<i32>,
}

impl CreateMusiqueInput {
    fn validate(self) -> ApiResult<CreateMusique> {
        let title = required_text("Musique title", &self.title)?;
        if self.duree < 0 {
            return Err(ApiError::validation("Duree cannot be negative"));
        }

        Ok(CreateMusique {
            title,
            duree: self.duree,
            album_id: self.album_id,
            artist_id: self.artist_id,
        })
    }
}

// =============================================================================
// Mutations
// =============================================================================

/// Library mutations
#[derive(Default)]
pub struct LibraryMutation;

#[Object]
impl LibraryMutation {
    /// Create a new artist
    ///
    /// Genres are trimmed and de-duplicated (case-insensitively), keeping
    /// their first spelling.
    async fn create_artist(&self, ctx: &Context<'_>, input: CreateArtistInput) -> Result<Artist> {
        let input = input.validate().map_err(to_graphql_error)?;
        let repo = ctx.data::<ArtistRepository>()?;

        let artist = repo
            .create(&input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
        Ok(Artist::from(artist))
    }

    /// Create a new album
    ///
    /// # Errors
    /// - Returns error if the title is empty
    /// - Returns error if the artist does not exist
    async fn create_album(&self, ctx: &Context<'_>, input: CreateAlbumInput) -> Result<Album> {
        let input = input.validate().map_err(to_graphql_error)?;
        let repo = ctx.data::<AlbumRepository>()?;

        let album = repo
            .create(&input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        tracing::info!(
            album_id = album.id,
            artist_id = album.artist_id,
            title = %album.title,
            "Album created"
        );
        Ok(Album::from(album))
    }

    /// Create a new musique
    ///
    /// # Errors
    /// - Returns error if the title is empty or the duree is negative
    /// - Returns error if the artist or album does not exist
    async fn create_musique(
        &self,
        ctx: &Context<'_>,
        input: CreateMusiqueInput,
    ) -> Result<Musique> {
        let input = input.validate().map_err(to_graphql_error)?;
        let repo = ctx.data::<MusiqueRepository>()?;

        let musique = repo
            .create(&input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        tracing::info!(
            musique_id = musique.id,
            artist_id = musique.artist_id,
            album_id = ?musique.album_id,
            "Musique created"
        );
        Ok(Musique::from(musique))
    }

    /// Put an existing musique into an album
    ///
    /// A musique belongs to at most one album, so this replaces any previous
    /// album. Returns the album.
    async fn add_musique_to_album(
        &self,
        ctx: &Context<'_>,
        album_id: i32,
        musique_id: i32,
    ) -> Result<Album> {
        let musique_repo = ctx.data::<MusiqueRepository>()?;
        let album_repo = ctx.data::<AlbumRepository>()?;

        musique_repo
            .attach_to_album(musique_id, album_id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?
            .ok_or_else(|| to_graphql_error(ApiError::not_found("musique", musique_id)))?;

        let album = album_repo
            .find_by_id(album_id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?
            .ok_or_else(|| to_graphql_error(ApiError::not_found("album", album_id)))?;

        tracing::info!(album_id, musique_id, "Musique added to album");
        Ok(Album::from(album))
    }
}
