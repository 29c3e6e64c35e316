//! User GraphQL type

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::PlaylistsByUserLoader;
use crate::models::User as DbUser;

use super::loader_error;
use super::playlist::Playlist;

/// User information exposed via GraphQL
pub struct User {
    inner: DbUser,
}

impl User {
    /// Create a new GraphQL User from a database User
    pub fn new(user: DbUser) -> Self {
        Self { inner: user }
    }
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self::new(user)
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> i32 {
        self.inner.id
    }

    /// Username
    async fn username(&self) -> &str {
        &self.inner.username
    }

    /// Email address
    async fn email(&self) -> &str {
        &self.inner.email
    }

    /// Account creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Playlists created by this user, newest first
    async fn playlists(&self, ctx: &Context<'_>) -> Result<Vec<Playlist>> {
        let loader = ctx.data::<DataLoader<PlaylistsByUserLoader>>()?;
        let playlists = loader.load_one(self.inner.id).await.map_err(loader_error)?;

        Ok(playlists
            .unwrap_or_default()
            .into_iter()
            .map(Playlist::from)
            .collect())
    }
}
