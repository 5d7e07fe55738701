//! HTTP handlers for the server.

pub mod canvas;
pub mod editor;

use axum::Json;
use serde_json::{Value, json};

/// GET /api - service banner.
pub async fn info() -> Json<Value> {
    Json(json!({
        "message": "Business Canvas API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
