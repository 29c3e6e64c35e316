//! GraphQL schema and resolvers for Discotheque
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for artists, albums, musiques, playlists and users
//! - Mutation resolvers creating catalog entries and linking them
//! - Type definitions whose relationships resolve through DataLoaders

pub mod loaders;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, CatalogSchema, SchemaBuilder};
