//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/gerar-pdf", post(handlers::generate_pdf))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Outermost first
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
