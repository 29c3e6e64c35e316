//! Error handling for the Discotheque API
//!
//! A single error type shared by REST routes and GraphQL resolvers. REST
//! handlers return it directly (via `IntoResponse`), resolvers convert it
//! with [`to_graphql_error`].

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Resource Errors ==========
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// A foreign key pointed at a row that does not exist
    #[error("referenced {0} does not exist")]
    MissingReference(&'static str),

    /// Unique constraint hit
    #[error("{resource_type} with this {field} already exists")]
    Conflict {
        resource_type: &'static str,
        field: String,
    },

    // ========== Validation Errors ==========
    /// Request validation failed
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========== Database Errors ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Database connection pool exhausted or unreachable
    #[error("database connection unavailable")]
    DatabaseUnavailable,

    // ========== Internal Errors ==========
    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::ValidationError(_) | Self::MissingReference(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::MissingReference(_) => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Whether the error message is safe to show to API clients
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Convert an API error into a GraphQL error with a `code` extension
///
/// Client errors keep their message; server errors are logged and replaced
/// by a generic message.
pub fn to_graphql_error(error: ApiError) -> async_graphql::Error {
    let code = error.error_code();
    let message = if error.is_client_error() {
        error.to_string()
    } else {
        error.log();
        "An unexpected error occurred".to_string()
    };

    async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
}

// ========== Constraint Classification ==========

/// Tables of the catalog schema, longest names first so that
/// `playlist_musiques` is matched before any shorter prefix.
const TABLES: &[(&str, &str)] = &[
    ("playlist_musiques", "playlist entry"),
    ("playlists", "playlist"),
    ("musiques", "musique"),
    ("artists", "artist"),
    ("albums", "album"),
    ("users", "user"),
];

/// Split a PostgreSQL default constraint name (`<table>_<column>_fkey`,
/// `<table>_<column>_key`) into its table's resource name and column.
fn parse_constraint(constraint: &str) -> Option<(&'static str, &str)> {
    let body = constraint
        .strip_suffix("_fkey")
        .or_else(|| constraint.strip_suffix("_key"))
        .or_else(|| constraint.strip_suffix("_check"))?;

    TABLES.iter().find_map(|(table, resource)| {
        body.strip_prefix(table)
            .and_then(|rest| rest.strip_prefix('_'))
            .map(|column| (*resource, column))
    })
}

/// Resource a foreign key column points at
fn referenced_resource(column: &str) -> &'static str {
    match column {
        "artist_id" => "artist",
        "album_id" => "album",
        "musique_id" => "musique",
        "playlist_id" => "playlist",
        "created_by_id" => "user",
        _ => "record",
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                return Self::DatabaseUnavailable
            }
            sqlx::Error::Database(db_err) => {
                let parsed = db_err.constraint().and_then(parse_constraint);

                if db_err.is_foreign_key_violation() {
                    let resource = parsed
                        .map(|(_, column)| referenced_resource(column))
                        .unwrap_or("record");
                    return Self::MissingReference(resource);
                }

                if db_err.is_unique_violation() {
                    let (resource_type, field) = parsed.unwrap_or(("record", "value"));
                    return Self::Conflict {
                        resource_type,
                        field: field.to_string(),
                    };
                }

                if db_err.is_check_violation() {
                    let field = parsed.map(|(_, column)| column).unwrap_or("value");
                    return Self::ValidationError(format!("invalid {}", field));
                }
            }
            _ => {}
        }

        Self::Database(err)
    }
}
