//! Musique (track) GraphQL type

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::{AlbumLoader, ArtistLoader};
use crate::models::Musique as DbMusique;

use super::album::Album;
use super::artist::Artist;
use super::{load_required, loader_error};

/// Musique information exposed via GraphQL
pub struct Musique {
    inner: DbMusique,
}

impl Musique {
    /// Create a new GraphQL Musique from a database Musique
    pub fn new(musique: DbMusique) -> Self {
        Self { inner: musique }
    }
}

impl From<DbMusique> for Musique {
    fn from(musique: DbMusique) -> Self {
        Self::new(musique)
    }
}

#[Object]
impl Musique {
    /// Unique musique identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Track title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Duration in seconds
    async fn duree(&self) -> i32 {
        self.inner.duree
    }

    /// Formatted duration (e.g., "4:32")
    async fn formatted_duree(&self) -> String {
        self.inner.formatted_duree()
    }

    /// Album ID (if attached to an album)
    async fn album_id(&self) -> Option<i32> {
        self.inner.album_id
    }

    /// Artist ID
    async fn artist_id(&self) -> i32 {
        self.inner.artist_id
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    // Relationship resolvers (using DataLoader for batched fetching)

    /// Album this musique belongs to
    async fn album(&self, ctx: &Context<'_>) -> Result<Option<Album>> {
        let Some(album_id) = self.inner.album_id else {
            return Ok(None);
        };

        let loader = ctx.data::<DataLoader<AlbumLoader>>()?;
        let album = loader.load_one(album_id).await.map_err(loader_error)?;
        Ok(album.map(Album::from))
    }

    /// Artist performing this musique
    async fn artist(&self, ctx: &Context<'_>) -> Result<Artist> {
        load_required::<ArtistLoader, Artist>(ctx, "artist", self.inner.artist_id).await
    }
}
