//! Canvas API handlers (`/api/business/canvas`).
//!
//! Every response, including errors, is an [`ApiResponse`] envelope.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Local;
use std::sync::Arc;

use crate::remote::{ApiResponse, CanvasPatch, GenerateRequest, RemoteCanvas};
use crate::server::generate::generate_canvas;

use super::super::state::AppState;

type Reply<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

fn not_found<T>() -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure(StatusCode::NOT_FOUND.as_u16(), "Canvas not found")),
    )
}

/// POST /api/business/canvas/generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Reply<RemoteCanvas> {
    let canvas = generate_canvas(&req.prompt, req.name, Local::now().naive_local());
    tracing::info!(id = canvas.id.as_deref().unwrap_or_default(), "generated canvas");

    state.store.write().await.insert(canvas.clone());
    Ok(Json(ApiResponse::ok("Canvas generated successfully", canvas)))
}

/// GET /api/business/canvas
pub async fn list(State(state): State<Arc<AppState>>) -> Reply<Vec<RemoteCanvas>> {
    let canvases = state.store.read().await.list().to_vec();
    Ok(Json(ApiResponse::ok("Canvases retrieved successfully", canvases)))
}

/// GET /api/business/canvas/:id
pub async fn get(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Reply<RemoteCanvas> {
    let store = state.store.read().await;
    let canvas = store.get(&id).ok_or_else(not_found::<RemoteCanvas>)?;
    Ok(Json(ApiResponse::ok("Canvas retrieved successfully", canvas.clone())))
}

/// PUT /api/business/canvas/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CanvasPatch>,
) -> Reply<RemoteCanvas> {
    let mut store = state.store.write().await;
    let canvas = store
        .update(&id, patch, Local::now().naive_local())
        .ok_or_else(not_found::<RemoteCanvas>)?;
    Ok(Json(ApiResponse::ok("Canvas updated successfully", canvas.clone())))
}

/// DELETE /api/business/canvas/:id
pub async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Reply<()> {
    state.store.write().await.remove(&id).ok_or_else(not_found::<()>)?;
    tracing::info!(id = %id, "deleted canvas");
    Ok(Json(ApiResponse::ok_empty("Canvas deleted successfully")))
}

/// POST /api/business/canvas/:id/duplicate
pub async fn duplicate(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Reply<RemoteCanvas> {
    let mut store = state.store.write().await;
    let copy = store
        .duplicate(&id, Local::now().naive_local())
        .ok_or_else(not_found::<RemoteCanvas>)?
        .clone();
    tracing::info!(from = %id, id = copy.id.as_deref().unwrap_or_default(), "duplicated canvas");
    Ok(Json(ApiResponse::ok("Canvas duplicated successfully", copy)))
}
