//! # Canvas Data Model
//!
//! The nine-block Business Model Canvas.
//!
//! A [`BusinessCanvas`] always holds exactly nine [`CanvasBlock`]s, one per
//! [`Slot`]. The slot set is closed: blocks are never added or removed, only
//! their `content` changes.
//!
//! ## Example
//!
//! ```
//! use bizcanvas::canvas::{BusinessCanvas, Slot};
//!
//! let canvas = BusinessCanvas::initial();
//! let block = canvas.block(Slot::ValuePropositions);
//! assert_eq!(block.id, "value-propositions");
//! assert!(block.content.is_empty());
//! ```

pub mod merge;
pub mod partial;

pub use merge::merge;
pub use partial::PartialCanvas;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CanvasError;

/// Identity of one of the nine canvas blocks.
///
/// Declaration order is the canonical order used for iteration and
/// serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    KeyPartners,
    KeyActivities,
    KeyResources,
    ValuePropositions,
    CustomerRelationships,
    Channels,
    CustomerSegments,
    CostStructure,
    RevenueStreams,
}

impl Slot {
    /// All nine slots in canonical order.
    pub const ALL: [Slot; 9] = [
        Slot::KeyPartners,
        Slot::KeyActivities,
        Slot::KeyResources,
        Slot::ValuePropositions,
        Slot::CustomerRelationships,
        Slot::Channels,
        Slot::CustomerSegments,
        Slot::CostStructure,
        Slot::RevenueStreams,
    ];

    /// Stable slug identity of the block (e.g. "key-partners").
    pub fn id(self) -> &'static str {
        match self {
            Slot::KeyPartners => "key-partners",
            Slot::KeyActivities => "key-activities",
            Slot::KeyResources => "key-resources",
            Slot::ValuePropositions => "value-propositions",
            Slot::CustomerRelationships => "customer-relationships",
            Slot::Channels => "channels",
            Slot::CustomerSegments => "customer-segments",
            Slot::CostStructure => "cost-structure",
            Slot::RevenueStreams => "revenue-streams",
        }
    }

    /// Display label.
    pub fn title(self) -> &'static str {
        match self {
            Slot::KeyPartners => "핵심 파트너",
            Slot::KeyActivities => "핵심 활동",
            Slot::KeyResources => "핵심 자원",
            Slot::ValuePropositions => "가치 제안",
            Slot::CustomerRelationships => "고객 관계",
            Slot::Channels => "채널",
            Slot::CustomerSegments => "고객 세그먼트",
            Slot::CostStructure => "비용 구조",
            Slot::RevenueStreams => "수익원",
        }
    }

    /// Hint items shown while the block is empty.
    pub fn placeholder_items(self) -> &'static [&'static str] {
        match self {
            Slot::KeyPartners => &["핵심 공급업체", "핵심 자원 제공자", "전략적 제휴"],
            Slot::KeyActivities => &["생산", "문제 해결", "플랫폼/네트워크"],
            Slot::KeyResources => &["물리적 자원", "지적 자산", "인적 자원", "재무 자원"],
            Slot::ValuePropositions => &["고객이 얻는 가치", "해결하는 문제", "충족하는 니즈"],
            Slot::CustomerRelationships => &["개인 지원", "셀프 서비스", "자동화 서비스", "커뮤니티"],
            Slot::Channels => &["인지 단계", "평가 단계", "구매 단계", "전달 단계", "사후 판매"],
            Slot::CustomerSegments => &["대중 시장", "틈새 시장", "세분화된 시장", "다각화된 시장"],
            Slot::CostStructure => &["고정 비용", "변동 비용", "규모의 경제", "범위의 경제"],
            Slot::RevenueStreams => &["자산 판매", "사용료", "구독료", "라이선스"],
        }
    }

    /// Multi-line placeholder text, one bullet per hint item.
    pub fn placeholder(self) -> String {
        self.placeholder_items()
            .iter()
            .map(|item| format!("• {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Key used by the in-memory and export schema (e.g. "keyPartners").
    pub fn camel_key(self) -> &'static str {
        match self {
            Slot::KeyPartners => "keyPartners",
            Slot::KeyActivities => "keyActivities",
            Slot::KeyResources => "keyResources",
            Slot::ValuePropositions => "valuePropositions",
            Slot::CustomerRelationships => "customerRelationships",
            Slot::Channels => "channels",
            Slot::CustomerSegments => "customerSegments",
            Slot::CostStructure => "costStructure",
            Slot::RevenueStreams => "revenueStreams",
        }
    }

    /// Key used by the remote API schema (e.g. "key_partners").
    pub fn snake_key(self) -> &'static str {
        match self {
            Slot::KeyPartners => "key_partners",
            Slot::KeyActivities => "key_activities",
            Slot::KeyResources => "key_resources",
            Slot::ValuePropositions => "value_propositions",
            Slot::CustomerRelationships => "customer_relationships",
            Slot::Channels => "channels",
            Slot::CustomerSegments => "customer_segments",
            Slot::CostStructure => "cost_structure",
            Slot::RevenueStreams => "revenue_streams",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.camel_key())
    }
}

/// Accepts the camelCase key, the snake_case key or the id slug.
impl FromStr for Slot {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| s == slot.camel_key() || s == slot.snake_key() || s == slot.id())
            .ok_or_else(|| CanvasError::UnknownSlot(s.to_string()))
    }
}

/// One block of the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasBlock {
    /// Stable slug identity; never changes after creation
    pub id: String,
    /// Display label
    pub title: String,
    /// One bullet per item, in display order
    pub content: Vec<String>,
    /// Hint shown when `content` is empty
    pub placeholder: String,
}

impl CanvasBlock {
    /// Empty block with the slot's placeholder.
    pub fn empty(slot: Slot) -> Self {
        Self {
            id: slot.id().to_string(),
            title: slot.title().to_string(),
            content: Vec::new(),
            placeholder: slot.placeholder(),
        }
    }

    /// Content-only fragment as produced by suggestion rules (no placeholder).
    pub fn fragment(slot: Slot, content: Vec<String>) -> Self {
        Self {
            id: slot.id().to_string(),
            title: slot.title().to_string(),
            content,
            placeholder: String::new(),
        }
    }

    /// Same block with its content replaced.
    pub fn with_content(&self, content: Vec<String>) -> Self {
        Self {
            content,
            ..self.clone()
        }
    }
}

/// The full nine-block canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCanvas {
    pub key_partners: CanvasBlock,
    pub key_activities: CanvasBlock,
    pub key_resources: CanvasBlock,
    pub value_propositions: CanvasBlock,
    pub customer_relationships: CanvasBlock,
    pub channels: CanvasBlock,
    pub customer_segments: CanvasBlock,
    pub cost_structure: CanvasBlock,
    pub revenue_streams: CanvasBlock,
}

impl BusinessCanvas {
    /// Session-start canvas: every block empty, placeholders filled.
    pub fn initial() -> Self {
        Self::from_fn(CanvasBlock::empty)
    }

    /// Build a canvas by producing each block from its slot.
    pub fn from_fn(mut f: impl FnMut(Slot) -> CanvasBlock) -> Self {
        Self {
            key_partners: f(Slot::KeyPartners),
            key_activities: f(Slot::KeyActivities),
            key_resources: f(Slot::KeyResources),
            value_propositions: f(Slot::ValuePropositions),
            customer_relationships: f(Slot::CustomerRelationships),
            channels: f(Slot::Channels),
            customer_segments: f(Slot::CustomerSegments),
            cost_structure: f(Slot::CostStructure),
            revenue_streams: f(Slot::RevenueStreams),
        }
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

    /// Blocks paired with their slot, in canonical order.
    pub fn blocks(&self) -> impl Iterator<Item = (Slot, &CanvasBlock)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.block(slot)))
    }
}

impl Default for BusinessCanvas {
    fn default() -> Self {
        Self::initial()
    }
}
