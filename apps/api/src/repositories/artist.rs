//! Artist repository for centralized database operations

use sqlx::{PgExecutor, PgPool};

use super::utils::ARTIST_COLUMNS;
use crate::models::{Artist, CreateArtist};

/// Repository for artist database operations
#[derive(Clone)]
pub struct ArtistRepository {
    pool: PgPool,
}

impl ArtistRepository {
    /// Create a new ArtistRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an artist by their unique ID
    pub async fn find_by_id(&self, artist_id: i32) -> Result<Option<Artist>, sqlx::Error> {
        let sql = format!("SELECT {} FROM artists WHERE id = $1", ARTIST_COLUMNS);
        sqlx::query_as::<_, Artist>(&sql)
            .bind(artist_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all artists with pagination
    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Artist>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM artists ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2",
            ARTIST_COLUMNS
        );
        sqlx::query_as::<_, Artist>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new artist
    pub async fn create(&self, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        Self::insert(&self.pool, input).await
    }

    /// Insert a new artist using any executor (pool, connection or transaction)
    pub async fn insert<'e, E>(executor: E, input: &CreateArtist) -> Result<Artist, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO artists (name, genres) VALUES ($1, $2) RETURNING {}",
            ARTIST_COLUMNS
        );
        sqlx::query_as::<_, Artist>(&sql)
            .bind(&input.name)
            .bind(&input.genres)
            .fetch_one(executor)
            .await
    }
}
