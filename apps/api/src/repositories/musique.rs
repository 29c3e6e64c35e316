//! Musique repository for centralized database operations

use sqlx::{PgExecutor, PgPool};

use super::utils::MUSIQUE_COLUMNS;
use crate::models::{CreateMusique, Musique};

/// Repository for musique database operations
#[derive(Clone)]
pub struct MusiqueRepository {
    pool: PgPool,
}

impl MusiqueRepository {
    /// Create a new MusiqueRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a musique by its unique ID
    pub async fn find_by_id(&self, musique_id: i32) -> Result<Option<Musique>, sqlx::Error> {
        let sql = format!("SELECT {} FROM musiques WHERE id = $1", MUSIQUE_COLUMNS);
        sqlx::query_as::<_, Musique>(&sql)
            .bind(musique_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all musiques with pagination
    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Musique>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM musiques ORDER BY id ASC LIMIT $1 OFFSET $2",
            MUSIQUE_COLUMNS
        );
        sqlx::query_as::<_, Musique>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new musique
    ///
    /// Fails with a foreign key violation if the artist or album does not exist.
    pub async fn create(&self, input: &CreateMusique) -> Result<Musique, sqlx::Error> {
        Self::insert(&self.pool, input).await
    }

    /// Insert a new musique using any executor (pool, connection or transaction)
    pub async fn insert<'e, E>(executor: E, input: &CreateMusique) -> Result<Musique, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO musiques (title, duree, album_id, artist_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            MUSIQUE_COLUMNS
        );
        sqlx::query_as::<_, Musique>(&sql)
            .bind(&input.title)
            .bind(input.duree)
            .bind(input.album_id)
            .bind(input.artist_id)
            .fetch_one(executor)
            .await
    }

    /// Attach a musique to an album
    ///
    /// Returns `None` when the musique does not exist.
    pub async fn attach_to_album(
        &self,
        musique_id: i32,
        album_id: i32,
    ) -> Result<Option<Musique>, sqlx::Error> {
        let sql = format!(
            "UPDATE musiques SET album_id = $1 WHERE id = $2 RETURNING {}",
            MUSIQUE_COLUMNS
        );
        sqlx::query_as::<_, Musique>(&sql)
            .bind(album_id)
            .bind(musique_id)
            .fetch_optional(&self.pool)
            .await
    }
}
