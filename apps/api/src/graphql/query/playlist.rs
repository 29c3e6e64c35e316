//! Playlist queries for Discotheque GraphQL API

use async_graphql::{Context, Object, Result};

use crate::error::to_graphql_error;
use crate::graphql::pagination::{clamp_limit, clamp_offset, MAX_LIMIT};
use crate::graphql::types::Playlist;
use crate::repositories::PlaylistRepository;

/// Playlist-related queries
#[derive(Default)]
pub struct PlaylistQuery;

#[Object]
impl PlaylistQuery {
    /// Get a playlist by ID
    async fn playlist(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Playlist>> {
        let repo = ctx.data::<PlaylistRepository>()?;
        let playlist = repo
            .find_by_id(id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(playlist.map(Playlist::from))
    }

    /// List all playlists, newest first
    async fn playlists(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Playlist>> {
        let repo = ctx.data::<PlaylistRepository>()?;
        let playlists = repo
            .find_all(clamp_limit(limit, MAX_LIMIT), clamp_offset(offset))
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(playlists.into_iter().map(Playlist::from).collect())
    }
}
