//! # Error Types
//!
//! This module defines error types used throughout the bizcanvas library.
//!
//! The mapper, merge and block-commit paths are total and never produce
//! these; they come from the remote client, the server and file export.

use thiserror::Error;

/// Main error type for bizcanvas operations
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The remote API answered, but with `success: false` or without the
    /// expected payload.
    #[error("{message}")]
    Remote {
        /// Operation name, e.g. "generate canvas"
        operation: &'static str,
        /// Server-provided message, or the generic fallback
        message: String,
    },

    /// Transport-level failure (non-OK status, connection, decoding)
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP server failure (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// A slot name that is not one of the nine canvas slots
    #[error("Unknown canvas slot: {0}")]
    UnknownSlot(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CanvasError {
    /// Generic message used when the server gives none.
    pub fn fallback_message(operation: &str) -> String {
        format!("Failed to {}", operation)
    }
}
