//! Musiques-by-Artist DataLoader for batched fetching

use async_graphql::dataloader::Loader;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::group_by_key;
use crate::models::Musique;
use crate::repositories::utils::MUSIQUE_COLUMNS;

/// DataLoader for batching musiques-by-artist queries
#[derive(Clone)]
pub struct MusiquesByArtistLoader {
    pool: PgPool,
}

impl MusiquesByArtistLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for MusiquesByArtistLoader {
    type Value = Vec<Musique>;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {} FROM musiques WHERE artist_id = ANY($1) ORDER BY artist_id, id ASC",
            MUSIQUE_COLUMNS
        );
        let musiques: Vec<Musique> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(group_by_key(keys, musiques, |m| Some(m.artist_id)))
    }
}
