use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::SharedState;

pub async fn health_check(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": state.cfg.app_name,
    }))
}

pub async fn api_root() -> Json<Value> {
    Json(json!({ "message": "Veritas API is running" }))
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Veritas Backend API", "version": env!("CARGO_PKG_VERSION") }))
}
