use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};
use tracing::debug;

use shared_models::error::AppError;

use crate::router::BookingState;

pub const GRAPHQL_PATH: &str = "/graphql";

pub async fn graphql_handler(
    State(state): State<BookingState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    debug!("Executing GraphQL operation {:?}", request.operation_name);
    state.schema.execute(request).await.into()
}

pub async fn graphiql(State(state): State<BookingState>) -> Result<Html<String>, AppError> {
    if !state.config.graphiql_enabled {
        return Err(AppError::NotFound("GraphiQL is disabled".to_string()));
    }
    Ok(Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()))
}

/// Schema in SDL form.
pub async fn schema_sdl(State(state): State<BookingState>) -> String {
    state.schema.sdl()
}
