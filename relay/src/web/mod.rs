//! HTTP surface
//!
//! Route table and CORS policy. CORS is fully permissive: the relay has no
//! auth boundary and is meant to sit on a trusted local network.

pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::traits::{ChatBackend, ProblemApi};

pub use handlers::AppState;

/// Build the Axum router with all routes
pub fn build_router<B, P>(state: AppState<B, P>) -> Router
where
    B: ChatBackend + 'static,
    P: ProblemApi + 'static,
{
    Router::new()
        .route("/problem", post(handlers::set_problem))
        .route("/set-language", post(handlers::set_language))
        .route("/ask", post(handlers::ask))
        .route("/summarize", post(handlers::summarize_interview))
        .route("/health", get(handlers::health_check))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()).into_inner())
        .with_state(state)
}
