//! Feciaq API — HTTP surface for the conference work registry.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

/// Builds the application router with every route mounted.
///
/// Middleware layers (tracing, CORS) are added by the binary so tests can
/// drive the bare router.
pub fn build_router(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::works::router())
        .with_state(state)
}
