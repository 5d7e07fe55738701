//! Server state and configuration.

use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

use super::store::CanvasStore;
use crate::session::Session;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
    /// Canvases managed through the canvas API.
    pub store: RwLock<CanvasStore>,
    /// The editor session; the only writer of its canvas.
    pub session: RwLock<Session>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            config,
            boot_time,
            store: RwLock::new(CanvasStore::new()),
            session: RwLock::new(Session::new()),
        }
    }
}
