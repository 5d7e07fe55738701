//! # HTTP Server for the Canvas Editor
//!
//! Serves the browser editor, the editor session API it talks to, and the
//! canvas API (`/api/business`) that [`CanvasClient`] consumes.
//!
//! ## Usage
//!
//! ```bash
//! bizcanvas serve --listen 0.0.0.0:8080
//! ```
//!
//! Then open http://localhost:8080 in a browser to edit the canvas.
//!
//! [`CanvasClient`]: crate::remote::CanvasClient

pub mod generate;
mod handlers;
mod state;
mod static_files;
pub mod store;

pub use state::{AppState, DEFAULT_LISTEN_ADDR, ServerConfig};

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::CanvasError;

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        .route("/api", get(handlers::info))
        // Editor session API
        .route("/api/editor/state", get(handlers::editor::state))
        .route("/api/editor/prompt", post(handlers::editor::prompt))
        .route("/api/editor/suggest", post(handlers::editor::suggest))
        .route("/api/editor/blocks/:slot", put(handlers::editor::commit_block))
        .route("/api/editor/export", get(handlers::editor::export))
        // Canvas API
        .route("/api/business/canvas", get(handlers::canvas::list))
        .route("/api/business/canvas/generate", post(handlers::canvas::generate))
        .route(
            "/api/business/canvas/:id",
            get(handlers::canvas::get)
                .put(handlers::canvas::update)
                .delete(handlers::canvas::delete),
        )
        .route(
            "/api/business/canvas/:id/duplicate",
            post(handlers::canvas::duplicate),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use bizcanvas::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), bizcanvas::error::CanvasError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), CanvasError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| CanvasError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e)))?;

    tracing::info!(listen = %config.listen_addr, "bizcanvas server started");
    tracing::info!("open http://{}/ in your browser to edit the canvas", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CanvasError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
