//! Playlist repository for centralized database operations
//!
//! Covers both the playlists table and the playlist_musiques join table.

use sqlx::{PgConnection, PgExecutor, PgPool};

use super::utils::PLAYLIST_COLUMNS;
use crate::models::{CreatePlaylist, Playlist, PlaylistMusique};

/// Result of appending a musique to a playlist
#[derive(Debug)]
pub enum PlaylistAppend {
    /// The musique was appended at this entry's position
    Added(PlaylistMusique),
    /// The musique was already in the playlist; nothing changed
    AlreadyPresent,
    /// No playlist has this id
    PlaylistMissing,
}

/// Repository for playlist database operations
#[derive(Clone)]
pub struct PlaylistRepository {
    pool: PgPool,
}

impl PlaylistRepository {
    /// Create a new PlaylistRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a playlist by its unique ID
    pub async fn find_by_id(&self, playlist_id: i32) -> Result<Option<Playlist>, sqlx::Error> {
        let sql = format!("SELECT {} FROM playlists WHERE id = $1", PLAYLIST_COLUMNS);
        sqlx::query_as::<_, Playlist>(&sql)
            .bind(playlist_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all playlists with pagination, newest first
    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Playlist>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM playlists ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            PLAYLIST_COLUMNS
        );
        sqlx::query_as::<_, Playlist>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new playlist
    ///
    /// `created_at` falls back to the database clock when not provided.
    /// Fails with a foreign key violation if the creator does not exist.
    pub async fn create(&self, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error> {
        Self::insert(&self.pool, input).await
    }

    /// Insert a new playlist using any executor (pool, connection or transaction)
    pub async fn insert<'e, E>(executor: E, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            r#"INSERT INTO playlists (name, description, created_by_id, created_at)
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            RETURNING {}"#,
            PLAYLIST_COLUMNS
        );
        sqlx::query_as::<_, Playlist>(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.created_by_id)
            .bind(input.created_at)
            .fetch_one(executor)
            .await
    }

    /// Append a musique at the end of a playlist in its own transaction
    ///
    /// Fails with a foreign key violation if the musique does not exist.
    pub async fn add_musique(
        &self,
        playlist_id: i32,
        musique_id: i32,
    ) -> Result<PlaylistAppend, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let outcome = Self::append_musique(&mut *tx, playlist_id, musique_id).await?;
        tx.commit().await?;
        Ok(outcome)
    }

    /// Append a musique at the end of a playlist on an open connection
    ///
    /// The playlist row is locked `FOR UPDATE` until the caller's transaction
    /// ends, so concurrent appends to one playlist take distinct positions.
    pub async fn append_musique(
        conn: &mut PgConnection,
        playlist_id: i32,
        musique_id: i32,
    ) -> Result<PlaylistAppend, sqlx::Error> {
        let locked: Option<i32> =
            sqlx::query_scalar("SELECT id FROM playlists WHERE id = $1 FOR UPDATE")
                .bind(playlist_id)
                .fetch_optional(&mut *conn)
                .await?;

        if locked.is_none() {
            return Ok(PlaylistAppend::PlaylistMissing);
        }

        let entry = sqlx::query_as::<_, PlaylistMusique>(
            r#"
            INSERT INTO playlist_musiques (playlist_id, musique_id, position)
            SELECT $1, $2, COALESCE(MAX(position) + 1, 0)
            FROM playlist_musiques
            WHERE playlist_id = $1
            ON CONFLICT (playlist_id, musique_id) DO NOTHING
            RETURNING playlist_id, musique_id, position, added_at
            "#,
        )
        .bind(playlist_id)
        .bind(musique_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(match entry {
            Some(entry) => PlaylistAppend::Added(entry),
            None => PlaylistAppend::AlreadyPresent,
        })
    }
}
