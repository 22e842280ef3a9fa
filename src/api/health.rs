use axum::response::Json;
use serde_json::{json, Value};

/// Liveness/readiness
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
