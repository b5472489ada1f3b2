use axum::{extract::State, Json};

use crate::state::SharedState;

pub async fn get_runtime(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let (provider, phase, error) = match state.analyzer.provider() {
        None => (None, "Offline", None),
        Some(p) => match p.ping().await {
            Ok(()) => (Some(p.info()), "Ready", None),
            Err(e) => (Some(p.info()), "Unreachable", Some(e.to_string())),
        },
    };

    Json(serde_json::json!({
        "provider": provider,
        "phase": phase,
        "error": error,
        "cached_results": state.cache.len().await,
        "cache_ttl_seconds": state.cfg.cache_ttl_seconds,
        "requests_per_minute": state.cfg.requests_per_minute,
    }))
}
