//! GraphQL schema builder for Discotheque
//!
//! This module provides the schema construction for the async-graphql API.
//! Repositories and DataLoaders are registered as schema data so every
//! resolver can reach them through the context.

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

use crate::config::Config;
use crate::repositories::{
    AlbumRepository, ArtistRepository, MusiqueRepository, PlaylistRepository, UserRepository,
};

use super::loaders::{
    AlbumLoader, AlbumsByArtistLoader, ArtistLoader, MusiquesByAlbumLoader,
    MusiquesByArtistLoader, MusiquesByPlaylistLoader, PlaylistsByUserLoader, UserLoader,
};
use super::mutation::Mutation;
use super::query::Query;

/// Default maximum query depth
pub const DEFAULT_MAX_DEPTH: usize = 12;

/// The Discotheque GraphQL schema type
pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema
pub struct SchemaBuilder {
    pool: PgPool,
    max_depth: usize,
}

impl SchemaBuilder {
    /// Create a new schema builder backed by the given pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deeply queries may nest relationships
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build the schema with all repositories and loaders registered
    ///
    /// Loaders are uncached: each one coalesces the keys requested while a
    /// query executes into one SQL statement, and never serves stale rows
    /// to a later request.
    pub fn build(self) -> CatalogSchema {
        let pool = self.pool;

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(ArtistRepository::new(pool.clone()))
            .data(AlbumRepository::new(pool.clone()))
            .data(MusiqueRepository::new(pool.clone()))
            .data(PlaylistRepository::new(pool.clone()))
            .data(UserRepository::new(pool.clone()))
            .data(DataLoader::new(ArtistLoader::new(pool.clone()), tokio::spawn))
            .data(DataLoader::new(AlbumLoader::new(pool.clone()), tokio::spawn))
            .data(DataLoader::new(UserLoader::new(pool.clone()), tokio::spawn))
            .data(DataLoader::new(
                AlbumsByArtistLoader::new(pool.clone()),
                tokio::spawn,
            ))
            .data(DataLoader::new(
                MusiquesByAlbumLoader::new(pool.clone()),
                tokio::spawn,
            ))
            .data(DataLoader::new(
                MusiquesByArtistLoader::new(pool.clone()),
                tokio::spawn,
            ))
            .data(DataLoader::new(
                MusiquesByPlaylistLoader::new(pool.clone()),
                tokio::spawn,
            ))
            .data(DataLoader::new(
                PlaylistsByUserLoader::new(pool.clone()),
                tokio::spawn,
            ))
            .data(pool)
            .limit_depth(self.max_depth)
            .finish()
    }
}

/// Create the GraphQL schema using the depth limit from configuration
pub fn build_schema(pool: PgPool, config: &Config) -> CatalogSchema {
    SchemaBuilder::new(pool)
        .max_depth(config.graphql_max_depth)
        .build()
}
