//! Library queries for Discotheque GraphQL API
//!
//! This module provides queries for browsing the music catalog:
//! - Artists: List and lookup by ID
//! - Albums: List and lookup by ID
//! - Musiques: List and lookup by ID

use async_graphql::{Context, Object, Result};

use crate::error::to_graphql_error;
use crate::graphql::pagination::{clamp_limit, clamp_offset, MAX_LIMIT};
use crate::graphql::types::{Album, Artist, Musique};
use crate::repositories::{AlbumRepository, ArtistRepository, MusiqueRepository};

/// Library-related queries for browsing artists, albums, and musiques
#[derive(Default)]
pub struct LibraryQuery;

#[Object]
impl LibraryQuery {
    // ==================== Artist Queries ====================

    /// Get an artist by ID
    async fn artist(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Artist>> {
        let repo = ctx.data::<ArtistRepository>()?;
        let artist = repo
            .find_by_id(id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(artist.map(Artist::from))
    }

    /// List all artists with pagination
    async fn artists(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Artist>> {
        let repo = ctx.data::<ArtistRepository>()?;
        let artists = repo
            .find_all(clamp_limit(limit, MAX_LIMIT), clamp_offset(offset))
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(artists.into_iter().map(Artist::from).collect())
    }

    // ==================== Album Queries ====================

    /// Get an album by ID
    async fn album(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Album>> {
        let repo = ctx.data::<AlbumRepository>()?;
        let album = repo
            .find_by_id(id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(album.map(Album::from))
    }

    /// List all albums with pagination
    async fn albums(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Album>> {
        let repo = ctx.data::<AlbumRepository>()?;
        let albums = repo
            .find_all(clamp_limit(limit, MAX_LIMIT), clamp_offset(offset))
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(albums.into_iter().map(Album::from).collect())
    }

    // ==================== Musique Queries ====================

    /// Get a musique by ID
    async fn musique(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Musique>> {
        let repo = ctx.data::<MusiqueRepository>()?;
        let musique = repo
            .find_by_id(id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(musique.map(Musique::from))
    }

    /// List all musiques with pagination
    async fn musiques(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Musique>> {
        let repo = ctx.data::<MusiqueRepository>()?;
        let musiques = repo
            .find_all(clamp_limit(limit, MAX_LIMIT), clamp_offset(offset))
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(musiques.into_iter().map(Musique::from).collect())
    }
}
