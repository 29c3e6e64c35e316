//! Albums-by-Artist DataLoader for batched fetching
//!
//! Batches artist ID lookups into a single query returning every album of
//! each artist.

use async_graphql::dataloader::Loader;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::group_by_key;
use crate::models::Album;
use crate::repositories::utils::ALBUM_COLUMNS;

/// DataLoader for batching albums-by-artist queries
#[derive(Clone)]
pub struct AlbumsByArtistLoader {
    pool: PgPool,
}

impl AlbumsByArtistLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for AlbumsByArtistLoader {
    type Value = Vec<Album>;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        // Guard against empty keys to avoid unnecessary database query
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {} FROM albums WHERE artist_id = ANY($1) ORDER BY artist_id, title ASC, id ASC",
            ALBUM_COLUMNS
        );
        let albums: Vec<Album> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(group_by_key(keys, albums, |a| Some(a.artist_id)))
    }
}
