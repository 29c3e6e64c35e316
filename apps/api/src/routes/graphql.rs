//! GraphQL HTTP endpoints

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::graphql::CatalogSchema;

/// Create the GraphQL router
///
/// `POST /graphql` always; `GET /graphql/playground` only when enabled.
pub fn graphql_router(schema: CatalogSchema, playground: bool) -> Router {
    let mut router = Router::new().route("/graphql", post(graphql_handler));

    if playground {
        router = router.route("/graphql/playground", get(graphql_playground));
    }

    router.with_state(schema)
}

/// Execute a GraphQL request against the schema
async fn graphql_handler(State(schema): State<CatalogSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground handler
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
