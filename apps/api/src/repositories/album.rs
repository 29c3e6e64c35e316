//! Album repository for centralized database operations

use sqlx::{PgExecutor, PgPool};

use super::utils::ALBUM_COLUMNS;
use crate::models::{Album, CreateAlbum};

/// Repository for album database operations
#[derive(Clone)]
pub struct AlbumRepository {
    pool: PgPool,
}

impl AlbumRepository {
    /// Create a new AlbumRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an album by its unique ID
    pub async fn find_by_id(&self, album_id: i32) -> Result<Option<Album>, sqlx::Error> {
        let sql = format!("SELECT {} FROM albums WHERE id = $1", ALBUM_COLUMNS);
        sqlx::query_as::<_, Album>(&sql)
            .bind(album_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all albums with pagination
    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Album>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM albums ORDER BY title ASC, id ASC LIMIT $1 OFFSET $2",
            ALBUM_COLUMNS
        );
        sqlx::query_as::<_, Album>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new album
    ///
    /// Fails with a foreign key violation if the artist does not exist.
    pub async fn create(&self, input: &CreateAlbum) -> Result<Album, sqlx::Error> {
        Self::insert(&self.pool, input).await
    }

    /// Insert a new album using any executor (pool, connection or transaction)
    pub async fn insert<'e, E>(executor: E, input: &CreateAlbum) -> Result<Album, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO albums (title, artist_id) VALUES ($1, $2) RETURNING {}",
            ALBUM_COLUMNS
        );
        sqlx::query_as::<_, Album>(&sql)
            .bind(&input.title)
            .bind(input.artist_id)
            .fetch_one(executor)
            .await
    }
}
