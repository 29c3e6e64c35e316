//! Playlists-by-User DataLoader for batched fetching

use async_graphql::dataloader::Loader;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::group_by_key;
use crate::models::Playlist;
use crate::repositories::utils::PLAYLIST_COLUMNS;

/// DataLoader for batching playlists-by-creator queries
#[derive(Clone)]
pub struct PlaylistsByUserLoader {
    pool: PgPool,
}

impl PlaylistsByUserLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for PlaylistsByUserLoader {
    type Value = Vec<Playlist>;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {} FROM playlists WHERE created_by_id = ANY($1) ORDER BY created_by_id, created_at DESC, id DESC",
            PLAYLIST_COLUMNS
        );
        let playlists: Vec<Playlist> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(group_by_key(keys, playlists, |p| Some(p.created_by_id)))
    }
}
