//! Album GraphQL type

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::{ArtistLoader, MusiquesByAlbumLoader};
use crate::graphql::pagination::paginate;
use crate::models::Album as DbAlbum;

use super::artist::Artist;
use super::{load_required, loader_error};
use super::musique::Musique;

/// Album information exposed via GraphQL
pub struct Album {
    inner: DbAlbum,
}

impl Album {
    /// Create a new GraphQL Album from a database Album
    pub fn new(album: DbAlbum) -> Self {
        Self { inner: album }
    }
}

impl From<DbAlbum> for Album {
    fn from(album: DbAlbum) -> Self {
        Self::new(album)
    }
}

#[Object]
impl Album {
    /// Unique album identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Album title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Artist ID
    async fn artist_id(&self) -> i32 {
        self.inner.artist_id
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    // Relationship resolvers

    /// Artist who released this album (uses DataLoader for batched fetching)
    async fn artist(&self, ctx: &Context<'_>) -> Result<Artist> {
        load_required::<ArtistLoader, Artist>(ctx, "artist", self.inner.artist_id).await
    }

    /// Musiques on this album (uses DataLoader for batched fetching)
    async fn musiques(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Musique>> {
        let loader = ctx.data::<DataLoader<MusiquesByAlbumLoader>>()?;
        let musiques = loader.load_one(self.inner.id).await.map_err(loader_error)?;

        Ok(paginate(musiques.unwrap_or_default(), limit, offset)
            .map(Musique::from)
            .collect())
    }
}
