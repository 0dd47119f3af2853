//! Route configuration.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers::{health_routes, persona_routes};
use crate::api::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/api/v1/personas", persona_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
