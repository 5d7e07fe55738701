//! # bizcanvas - Business Model Canvas Editor
//!
//! bizcanvas builds and edits nine-block Business Model Canvases. It
//! provides:
//!
//! - **Canvas model**: the closed set of nine slots and their blocks
//! - **Prompt mapper**: keyword rules that turn a business idea into
//!   suggested block content
//! - **Editing**: merge, per-block editing and a session that owns the canvas
//! - **Export**: pretty JSON files named by date
//! - **Remote API**: a client for the canvas REST API, and a server for it
//!
//! ## Quick Start
//!
//! ```
//! use bizcanvas::{canvas::{merge, BusinessCanvas, Slot}, mapper::map_prompt};
//!
//! let canvas = BusinessCanvas::initial();
//! let suggestions = map_prompt("20-30대를 위한 구독형 모바일 앱");
//! let canvas = merge(&canvas, &suggestions);
//!
//! assert_eq!(canvas.customer_segments.content, vec!["20-30대 타겟 고객"]);
//! assert_eq!(canvas.block(Slot::RevenueStreams).content.len(), 2);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Slots, blocks, partial suggestions, merge |
//! | [`mapper`] | Prompt-to-canvas rule tables |
//! | [`editor`] | Block viewing/editing state machine |
//! | [`board`] | Grid layout and JSON export |
//! | [`session`] | Canvas owner and prompt panel |
//! | [`remote`] | Canvas API client and wire types |
//! | [`server`] | HTTP server for the editor and canvas API |
//! | [`error`] | Error types |

pub mod board;
pub mod canvas;
pub mod editor;
pub mod error;
pub mod mapper;
pub mod remote;
pub mod server;
pub mod session;

// Re-exports for convenience
pub use canvas::{BusinessCanvas, CanvasBlock, PartialCanvas, Slot};
pub use error::CanvasError;
pub use session::Session;
