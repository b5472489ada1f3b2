pub mod cache;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod provider_factory;
pub mod provider_gemini;
pub mod provider_lmstudio;
pub mod retriever;
pub mod routes_analyze;
pub mod routes_health;
pub mod routes_runtime;
pub mod state;

use axum::{routing::{get, post}, Router};
use tower_http::cors::CorsLayer;

pub use state::{AppState, SharedState};

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(routes_health::root))
        .route("/api/", get(routes_health::api_root))
        .route("/api/health", get(routes_health::health_check))
        .route("/api/runtime", get(routes_runtime::get_runtime))
        .route("/api/analyze", post(routes_analyze::analyze_content))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
