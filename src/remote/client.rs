//! HTTP client for the remote canvas API.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ApiResponse, CanvasPatch, GenerateRequest, RemoteCanvas};
use crate::error::CanvasError;

/// Base URL used when none is configured (a local `bizcanvas serve`).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api/business";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base, e.g. "https://host/api/business"
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Thin wrapper around the six canvas endpoints.
///
/// Every call is a single request: no retries, no deduplication.
#[derive(Debug, Clone)]
pub struct CanvasClient {
    http: Client,
    base_url: String,
}

impl CanvasClient {
    pub fn new(config: ClientConfig) -> Result<Self, CanvasError> {
        let http = Client::builder()
            .user_agent(concat!("bizcanvas/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| CanvasError::Transport(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /canvas/generate
    pub async fn generate(&self, prompt: &str, name: Option<&str>) -> Result<RemoteCanvas, CanvasError> {
        let body = GenerateRequest {
            prompt: prompt.to_string(),
            name: name.map(str::to_string),
        };
        let request = self.http.post(self.url("/canvas/generate")).json(&body);
        self.send::<RemoteCanvas>("generate canvas", request)
            .await?
            .into_payload("generate canvas")
    }

    /// GET /canvas
    pub async fn list(&self) -> Result<Vec<RemoteCanvas>, CanvasError> {
        let request = self.http.get(self.url("/canvas"));
        self.send::<Vec<RemoteCanvas>>("fetch canvases", request)
            .await?
            .into_payload("fetch canvases")
    }

    /// GET /canvas/{id}
    pub async fn get(&self, id: &str) -> Result<RemoteCanvas, CanvasError> {
        let request = self.http.get(self.url(&format!("/canvas/{}", id)));
        self.send::<RemoteCanvas>("fetch canvas", request)
            .await?
            .into_payload("fetch canvas")
    }

    /// PUT /canvas/{id}
    pub async fn update(&self, id: &str, patch: &CanvasPatch) -> Result<RemoteCanvas, CanvasError> {
        let request = self.http.put(self.url(&format!("/canvas/{}", id))).json(patch);
        self.send::<RemoteCanvas>("update canvas", request)
            .await?
            .into_payload("update canvas")
    }

    /// DELETE /canvas/{id}
    pub async fn delete(&self, id: &str) -> Result<(), CanvasError> {
        let request = self.http.delete(self.url(&format!("/canvas/{}", id)));
        self.send::<serde_json::Value>("delete canvas", request)
            .await?
            .ensure_success("delete canvas")
    }

    /// POST /canvas/{id}/duplicate
    pub async fn duplicate(&self, id: &str) -> Result<RemoteCanvas, CanvasError> {
        let request = self.http.post(self.url(&format!("/canvas/{}/duplicate", id)));
        self.send::<RemoteCanvas>("duplicate canvas", request)
            .await?
            .into_payload("duplicate canvas")
    }

    /// Send one request and decode the envelope.
    ///
    /// A non-OK status is a transport failure regardless of the body.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, CanvasError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(operation, error = %e, "request failed");
            CanvasError::Transport(format!("{}: {}", CanvasError::fallback_message(operation), e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation, %status, "non-OK response");
            return Err(CanvasError::Transport(format!(
                "{} (HTTP {})",
                CanvasError::fallback_message(operation),
                status.as_u16()
            )));
        }

        response.json::<ApiResponse<T>>().await.map_err(|e| {
            CanvasError::Transport(format!("{}: invalid response: {}", CanvasError::fallback_message(operation), e))
        })
    }
}
