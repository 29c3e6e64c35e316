//! Artist GraphQL type

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::{AlbumsByArtistLoader, MusiquesByArtistLoader};
use crate::graphql::pagination::paginate;
use crate::models::Artist as DbArtist;

use super::album::Album;
use super::loader_error;
use super::musique::Musique;

/// Artist information exposed via GraphQL
pub struct Artist {
    inner: DbArtist,
}

impl Artist {
    /// Create a new GraphQL Artist from a database Artist
    pub fn new(artist: DbArtist) -> Self {
        Self { inner: artist }
    }
}

impl From<DbArtist> for Artist {
    fn from(artist: DbArtist) -> Self {
        Self::new(artist)
    }
}

#[Object]
impl Artist {
    /// Unique artist identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Artist name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Genre tags
    async fn genres(&self) -> &[String] {
        &self.inner.genres
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    // Relationship resolvers

    /// Albums by this artist (uses DataLoader for batched fetching)
    async fn albums(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Album>> {
        let loader = ctx.data::<DataLoader<AlbumsByArtistLoader>>()?;
        let albums = loader.load_one(self.inner.id).await.map_err(loader_error)?;

        Ok(paginate(albums.unwrap_or_default(), limit, offset)
            .map(Album::from)
            .collect())
    }

    /// Musiques performed by this artist (uses DataLoader for batched fetching)
    async fn musiques(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<Musique>> {
        let loader = ctx.data::<DataLoader<MusiquesByArtistLoader>>()?;
        let musiques = loader.load_one(self.inner.id).await.map_err(loader_error)?;

        Ok(paginate(musiques.unwrap_or_default(), limit, offset)
            .map(Musique::from)
            .collect())
    }
}
