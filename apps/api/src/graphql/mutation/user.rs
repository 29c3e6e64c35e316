//! User mutations for Discotheque GraphQL API

use async_graphql::{Context, InputObject, Object, Result};

use super::{required_text, MAX_NAME_LENGTH};
use crate::error::{to_graphql_error, ApiError, ApiResult};
use crate::graphql::types::User;
use crate::models::CreateUser;
use crate::repositories::UserRepository;

/// Input for creating a new user
#[derive(Debug, InputObject)]
pub struct CreateUserInput {
    /// Unique username
    pub username: String,
    /// Unique email address
    pub email: String,
}

impl CreateUserInput {
    fn validate(self) -> ApiResult<CreateUser> {
        let username = required_text("Username", &self.username)?;

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ApiError::validation("Email cannot be empty"));
        }
        if email.chars().count() > MAX_NAME_LENGTH {
            return Err(ApiError::validation(format!(
                "Email cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ApiError::validation("Invalid email address")),
        }

        Ok(CreateUser { username, email })
    }
}

/// User mutations
#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create a new user
    ///
    /// # Errors
    /// - Returns error if the username or email is invalid
    /// - Returns error if the username or email is already taken
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
        let input = input.validate().map_err(to_graphql_error)?;
        let repo = ctx.data::<UserRepository>()?;

        let user = repo
            .create(&input)
            .await
            .map_err(|e| to_graphql_error(e.into()))?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(User::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn input(username: &str, email: &str) -> CreateUserInput {
        CreateUserInput {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_email_is_lowercased() {
        let user = input(" rocklover ", " RockLover@Example.com ").validate().unwrap();
        assert_eq!(user.username, "rocklover");
        assert_eq!(user.email, "rocklover@example.com");
    }

    #[rstest]
    #[case("")]
    #[case("no-at-sign")]
    #[case("@example.com")]
    #[case("popfan@")]
    fn test_invalid_emails(#[case] email: &str) {
        assert_matches!(
            input("popfan", email).validate(),
            Err(ApiError::ValidationError(_))
        );
    }

    #[test]
    fn test_blank_username_rejected() {
        assert_matches!(
            input("   ", "popfan@example.com").validate(),
            Err(ApiError::ValidationError(ref msg)) if msg == "Username cannot be empty"
        );
    }

    #[test]
    fn test_email_length_counts_characters() {
        let domain = "é".repeat(MAX_NAME_LENGTH - "a@".len());
        let at_limit = format!("a@{}", domain);
        assert!(at_limit.len() > MAX_NAME_LENGTH);
        assert!(input("accented", &at_limit).validate().is_ok());

        let over_limit = format!("ab@{}", domain);
        assert_matches!(
            input("accented", &over_limit).validate(),
            Err(ApiError::ValidationError(ref msg)) if msg.starts_with("Email cannot exceed")
        );
    }
}
