use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check. Always succeeds.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "NSW feasibility API is running"
    }))
}
