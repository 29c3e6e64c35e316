//! Musiques-by-Playlist DataLoader for batched fetching
//!
//! Walks the playlist_musiques join table for many playlists at once and
//! returns each playlist's musiques in playlist order.

use async_graphql::dataloader::Loader;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use super::group_by_key;
use crate::models::Musique;
use crate::repositories::utils::{qualified, MUSIQUE_COLUMNS};

/// A musique row tagged with the playlist it was requested for
#[derive(FromRow)]
struct PlaylistRow {
    playlist_id: i32,
    #[sqlx(flatten)]
    musique: Musique,
}

/// DataLoader for batching musiques-by-playlist queries
#[derive(Clone)]
pub struct MusiquesByPlaylistLoader {
    pool: PgPool,
}

impl MusiquesByPlaylistLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for MusiquesByPlaylistLoader {
    type Value = Vec<Musique>;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            r#"
            SELECT pm.playlist_id, {cols}
            FROM playlist_musiques pm
            JOIN musiques m ON m.id = pm.musique_id
            WHERE pm.playlist_id = ANY($1)
            ORDER BY pm.playlist_id, pm.position ASC, pm.added_at ASC, pm.musique_id ASC
            "#,
            cols = qualified("m", MUSIQUE_COLUMNS)
        );
        let rows: Vec<PlaylistRow> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        let grouped = group_by_key(keys, rows, |r| Some(r.playlist_id));
        Ok(grouped
            .into_iter()
            .map(|(id, rows)| (id, rows.into_iter().map(|r| r.musique).collect()))
            .collect())
    }
}
