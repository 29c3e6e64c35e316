//! User repository for centralized database operations

use sqlx::{PgExecutor, PgPool};

use super::utils::USER_COLUMNS;
use crate::models::{CreateUser, User};

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by their unique ID
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all users with pagination
    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM users ORDER BY username ASC LIMIT $1 OFFSET $2",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new user
    ///
    /// Fails with a unique violation if the username or email is taken.
    pub async fn create(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        Self::insert(&self.pool, input).await
    }

    /// Insert a new user using any executor (pool, connection or transaction)
    pub async fn insert<'e, E>(executor: E, input: &CreateUser) -> Result<User, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&input.username)
            .bind(&input.email)
            .fetch_one(executor)
            .await
    }
}
