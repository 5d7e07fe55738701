//! Editor session handlers (`/api/editor`).
//!
//! The browser page is a view over the server-held [`Session`]; every
//! change it makes arrives here and is applied under the session lock.
//!
//! [`Session`]: crate::session::Session

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::board::{self, GridCell};
use crate::canvas::{BusinessCanvas, PartialCanvas, Slot};
use crate::session::{SOFT_LIMIT, Session};

use super::super::state::AppState;

/// Canvas and prompt history as seen by the page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub canvas: BusinessCanvas,
    pub history: Vec<String>,
    pub layout: &'static [GridCell],
    pub soft_limit: usize,
}

impl EditorView {
    fn of(session: &Session) -> Self {
        Self {
            canvas: session.canvas().clone(),
            history: session.prompt().history().to_vec(),
            layout: board::layout(),
            soft_limit: SOFT_LIMIT,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptBody {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct BlockBody {
    /// Free-typed block text, one item per line
    pub text: String,
}

/// GET /api/editor/state
pub async fn state(State(state): State<Arc<AppState>>) -> Json<EditorView> {
    Json(EditorView::of(&*state.session.read().await))
}

/// POST /api/editor/prompt - submit a prompt and merge its suggestions.
///
/// Blank prompts are ignored; the unchanged view is returned.
pub async fn prompt(State(state): State<Arc<AppState>>, Json(body): Json<PromptBody>) -> Json<EditorView> {
    let mut session = state.session.write().await;
    session.prompt_mut().set_input(body.prompt);
    session.submit_prompt();
    Json(EditorView::of(&session))
}

/// PUT /api/editor/blocks/:slot - commit edited block text.
pub async fn commit_block(
    State(state): State<Arc<AppState>>,
    Path(slot): Path<String>,
    Json(body): Json<BlockBody>,
) -> Result<Json<EditorView>, (StatusCode, String)> {
    let slot: Slot = slot.parse().map_err(|e: crate::CanvasError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut session = state.session.write().await;
    session.edit_block(slot, &body.text);
    Ok(Json(EditorView::of(&session)))
}

/// POST /api/editor/suggest - preview suggestions without applying them.
pub async fn suggest(State(state): State<Arc<AppState>>, Json(body): Json<PromptBody>) -> Json<PartialCanvas> {
    Json(state.session.read().await.suggest(&body.prompt))
}

/// GET /api/editor/export - download the canvas as a dated JSON file.
pub async fn export(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (file_name, json) = state
        .session
        .read()
        .await
        .export(Local::now().date_naive())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Export failed: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        json,
    ))
}
