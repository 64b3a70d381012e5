use axum::Json;
use serde_json::{json, Value};

use crate::shared::data::store;

/// GET /health
pub async fn health() -> Json<Value> {
    let source = store::get_service()
        .map(|service| service.name())
        .unwrap_or("uninitialized");
    Json(json!({ "status": "ok", "source": source }))
}
