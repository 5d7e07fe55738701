//! # Remote Canvas API
//!
//! Wire types shared by the [`CanvasClient`] and the bundled server, plus
//! the response envelope every endpoint answers with.
//!
//! The remote schema names slots in snake_case (`key_partners`) and adds
//! `id`, `name` and timestamps; the in-memory [`BusinessCanvas`] uses
//! camelCase. [`RemoteCanvas::from_canvas`] and [`RemoteCanvas::to_canvas`]
//! translate between the two slot by slot.

mod client;

pub use client::{CanvasClient, ClientConfig, DEFAULT_BASE_URL};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::canvas::{BusinessCanvas, CanvasBlock, Slot};
use crate::error::CanvasError;

/// Envelope around every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub response_object: Option<T>,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: Some(payload),
            status_code: 200,
        }
    }

    /// Successful response that carries no payload (e.g. delete).
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: None,
            status_code: 200,
        }
    }

    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code,
        }
    }

    /// Extract the payload, failing on `success: false` or a missing payload.
    pub fn into_payload(self, operation: &'static str) -> Result<T, CanvasError> {
        match (self.success, self.response_object) {
            (true, Some(payload)) => Ok(payload),
            _ => Err(remote_error(operation, self.message)),
        }
    }

    /// Check success for operations without a payload.
    pub fn ensure_success(self, operation: &'static str) -> Result<(), CanvasError> {
        if self.success {
            Ok(())
        } else {
            Err(remote_error(operation, self.message))
        }
    }
}

fn remote_error(operation: &'static str, message: String) -> CanvasError {
    let message = if message.is_empty() {
        CanvasError::fallback_message(operation)
    } else {
        message
    };
    CanvasError::Remote { operation, message }
}

/// A canvas as stored by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCanvas {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub key_partners: CanvasBlock,
    pub key_activities: CanvasBlock,
    pub key_resources: CanvasBlock,
    pub value_propositions: CanvasBlock,
    pub customer_relationships: CanvasBlock,
    pub channels: CanvasBlock,
    pub customer_segments: CanvasBlock,
    pub cost_structure: CanvasBlock,
    pub revenue_streams: CanvasBlock,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl RemoteCanvas {
    /// Remote form of an in-memory canvas, without id, name or timestamps.
    pub fn from_canvas(canvas: &BusinessCanvas) -> Self {
        Self {
            id: None,
            name: None,
            key_partners: canvas.key_partners.clone(),
            key_activities: canvas.key_activities.clone(),
            key_resources: canvas.key_resources.clone(),
            value_propositions: canvas.value_propositions.clone(),
            customer_relationships: canvas.customer_relationships.clone(),
            channels: canvas.channels.clone(),
            customer_segments: canvas.customer_segments.clone(),
            cost_structure: canvas.cost_structure.clone(),
            revenue_streams: canvas.revenue_streams.clone(),
            created_at: None,
            updated_at: None,
        }
    }

    /// The nine blocks as an in-memory canvas.
    pub fn to_canvas(&self) -> BusinessCanvas {
        BusinessCanvas::from_fn(|slot| self.block(slot).clone())
    }

    pub fn block(&self, slot: Slot) -> &CanvasBlock {
        match slot {
            Slot::KeyPartners => &self.key_partners,
            Slot::KeyActivities => &self.key_activities,
            Slot::KeyResources => &self.key_resources,
            Slot::ValuePropositions => &self.value_propositions,
            Slot::CustomerRelationships => &self.customer_relationships,
            Slot::Channels => &self.channels,
            Slot::CustomerSegments => &self.customer_segments,
            Slot::CostStructure => &self.cost_structure,
            Slot::RevenueStreams => &self.revenue_streams,
        }
    }

    pub fn block_mut(&mut self, slot: Slot) -> &mut CanvasBlock {
        match slot {
            Slot::KeyPartners => &mut self.key_partners,
            Slot::KeyActivities => &mut self.key_activities,
            Slot::KeyResources => &mut self.key_resources,
            Slot::ValuePropositions => &mut self.value_propositions,
            Slot::CustomerRelationships => &mut self.customer_relationships,
            Slot::Channels => &mut self.channels,
            Slot::CustomerSegments => &mut self.customer_segments,
            Slot::CostStructure => &mut self.cost_structure,
            Slot::RevenueStreams => &mut self.revenue_streams,
        }
    }
}

/// Request body for `POST /canvas/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for `PUT /canvas/{id}`; only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_partners: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_activities: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_resources: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_propositions: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_relationships: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_segments: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_structure: Option<CanvasBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_streams: Option<CanvasBlock>,
}

impl CanvasPatch {
    /// Patch carrying a single block.
    pub fn block(slot: Slot, block: CanvasBlock) -> Self {
        let mut patch = Self::default();
        *patch.slot_mut(slot) = Some(block);
        patch
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<CanvasBlock> {
        match slot {
            Slot::KeyPartners => &mut self.key_partners,
            Slot::KeyActivities => &mut self.key_activities,
            Slot::KeyResources => &mut self.key_resources,
            Slot::ValuePropositions => &mut self.value_propositions,
            Slot::CustomerRelationships => &mut self.customer_relationships,
            Slot::Channels => &mut self.channels,
            Slot::CustomerSegments => &mut self.customer_segments,
            Slot::CostStructure => &mut self.cost_structure,
            Slot::RevenueStreams => &mut self.revenue_streams,
        }
    }

    /// Apply present fields to `canvas`. Returns whether anything changed.
    pub fn apply(mut self, canvas: &mut RemoteCanvas) -> bool {
        let mut changed = false;
        if let Some(name) = self.name.take() {
            canvas.name = Some(name);
            changed = true;
        }
        for slot in Slot::ALL {
            if let Some(block) = self.slot_mut(slot).take() {
                *canvas.block_mut(slot) = block;
                changed = true;
            }
        }
        changed
    }
}
