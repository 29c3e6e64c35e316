//! Single-entity DataLoader shared by every table keyed on `id`

use async_graphql::dataloader::Loader;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::models::{Album, Artist, User};
use crate::repositories::utils::{ALBUM_COLUMNS, ARTIST_COLUMNS, USER_COLUMNS};

/// A row that can be fetched in bulk by primary key
pub trait Keyed: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static str;

    fn key(&self) -> i32;
}

impl Keyed for Artist {
    const TABLE: &'static str = "artists";
    const COLUMNS: &'static str = ARTIST_COLUMNS;

    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for Album {
    const TABLE: &'static str = "albums";
    const COLUMNS: &'static str = ALBUM_COLUMNS;

    fn key(&self) -> i32 {
        self.id
    }
}

impl Keyed for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = USER_COLUMNS;

    fn key(&self) -> i32 {
        self.id
    }
}

/// Loads `T` rows by id; ids without a row are simply absent from the map
pub struct ByIdLoader<T> {
    pool: PgPool,
    _row: PhantomData<fn() -> T>,
}

impl<T> ByIdLoader<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _row: PhantomData,
        }
    }
}

impl<T> Clone for ByIdLoader<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

pub type ArtistLoader = ByIdLoader<Artist>;
pub type AlbumLoader = ByIdLoader<Album>;
pub type UserLoader = ByIdLoader<User>;

/// `SELECT <columns> FROM <table> WHERE id = ANY($1)`
fn select_by_ids<T: Keyed>() -> String {
    format!("SELECT {} FROM {} WHERE id = ANY($1)", T::COLUMNS, T::TABLE)
}

impl<T: Keyed> Loader<i32> for ByIdLoader<T> {
    type Value = T;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = select_by_ids::<T>();
        let rows: Vec<T> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(rows.into_iter().map(|row| (row.key(), row)).collect())
    }
}
