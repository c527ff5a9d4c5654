//! HTTP server for the text simplifier service.
//!
//! Exposes the simplify and keyword endpoints over JSON, with an
//! environment-driven CORS policy, structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use config::CorsConfig;

/// Creates the Axum application router with all routes.
///
/// The text endpoints are served both with and without their trailing slash.
pub fn create_app(cors: &CorsConfig, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/simplify-text/", post(routes::simplify::simplify_text))
        .route("/simplify-text", post(routes::simplify::simplify_text))
        .route("/keywords/", post(routes::keywords::keywords))
        .route("/keywords", post(routes::keywords::keywords))
        .merge(metrics_router)
        .layer(cors.layer())
        .layer(TraceLayer::new_for_http())
}
