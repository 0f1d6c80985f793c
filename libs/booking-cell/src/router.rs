use std::sync::Arc;
use axum::{routing::get, Router};
use shared_config::AppConfig;

use crate::handlers::{graphiql, graphql_handler, schema_sdl, GRAPHQL_PATH};
use crate::schema::{build_schema, ClinicSchema};
use crate::services::BookingService;

#[derive(Clone)]
pub struct BookingState {
    pub schema: ClinicSchema,
    pub config: Arc<AppConfig>,
}

pub fn booking_routes(config: Arc<AppConfig>, service: BookingService) -> Router {
    let state = BookingState {
        schema: build_schema(service),
        config,
    };

    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/graphql/schema", get(schema_sdl))
        .with_state(state)
}
