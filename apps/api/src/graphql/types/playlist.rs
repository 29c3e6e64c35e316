//! Playlist GraphQL type

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::{MusiquesByPlaylistLoader, UserLoader};
use crate::graphql::pagination::paginate;
use crate::models::Playlist as DbPlaylist;

use super::{load_required, loader_error};
use super::musique::Musique;
use super::user::User;

/// Playlist information exposed via GraphQL
pub struct Playlist {
    inner: DbPlaylist,
}

impl Playlist {
    /// Create a new GraphQL Playlist from a database Playlist
    pub fn new(playlist: DbPlaylist) -> Self {
        Self { inner: playlist }
    }
}

impl From<DbPlaylist> for Playlist {
    fn from(playlist: DbPlaylist) -> Self {
        Self::new(playlist)
    }
}

#[Object]
impl Playlist {
    /// Unique playlist identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Playlist name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Playlist description
    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// ID of the user who created this playlist
    async fn created_by_id(&self) -> i32 {
        self.inner.created_by_id
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    // Relationship resolvers

    /// User who created this playlist
    async fn created_by(&self, ctx: &Context<'_>) -> Result<User> {
        load_required::<UserLoader, User>(ctx, "user", self.inner.created_by_id).await
    }

    /// Musiques in playlist order (uses DataLoader for batched fetching)
    async fn musiques(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Musique>> {
        let loader = ctx.data::<DataLoader<MusiquesByPlaylistLoader>>()?;
        let musiques = loader.load_one(self.inner.id).await.map_err(loader_error)?;

        Ok(paginate(musiques.unwrap_or_default(), limit, offset)
            .map(Musique::from)
            .collect())
    }

    /// Number of musiques in the playlist
    async fn musique_count(&self, ctx: &Context<'_>) -> Result<i32> {
        let loader = ctx.data::<DataLoader<MusiquesByPlaylistLoader>>()?;
        let musiques = loader.load_one(self.inner.id).await.map_err(loader_error)?;
        Ok(musiques.map_or(0, |m| m.len() as i32))
    }
}
