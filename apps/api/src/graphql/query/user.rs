//! User queries for Discotheque GraphQL API

use async_graphql::{Context, Object, Result};

use crate::error::to_graphql_error;
use crate::graphql::pagination::{clamp_limit, clamp_offset, MAX_LIMIT};
use crate::graphql::types::User;
use crate::repositories::UserRepository;

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Get a user by ID
    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<User>> {
        let repo = ctx.data::<UserRepository>()?;
        let user = repo
            .find_by_id(id)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(user.map(User::from))
    }

    /// List all users ordered by username
    async fn users(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<Vec<User>> {
        let repo = ctx.data::<UserRepository>()?;
        let users = repo
            .find_all(clamp_limit(limit, MAX_LIMIT), clamp_offset(offset))
            .await
            .map_err(|e| to_graphql_error(e.into()))?;
        Ok(users.into_iter().map(User::from).collect())
    }
}
