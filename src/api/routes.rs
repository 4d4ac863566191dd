use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommend", post(handlers::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Outermost, so the trace span already sees the request id
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
