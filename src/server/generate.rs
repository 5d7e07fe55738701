//! Full-canvas generation for the `generate` endpoint.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::canvas::{BusinessCanvas, CanvasBlock, Slot};
use crate::mapper::RuleSet;
use crate::remote::RemoteCanvas;

/// Line used when the rules leave a slot empty.
fn fallback(slot: Slot) -> Option<&'static str> {
    match slot {
        Slot::KeyPartners => Some("전략적 파트너십 구축 필요"),
        Slot::KeyActivities => Some("핵심 활동 정의 필요"),
        Slot::ValuePropositions => Some("고객 가치 제안 정의 필요"),
        Slot::Channels => Some("유통 채널 정의 필요"),
        Slot::CustomerSegments => Some("타겟 고객 정의 필요"),
        Slot::RevenueStreams => Some("수익 모델 정의 필요"),
        // Always populated by unconditional rules
        Slot::KeyResources | Slot::CustomerRelationships | Slot::CostStructure => None,
    }
}

/// Build a complete stored canvas from a prompt.
pub fn generate_canvas(prompt: &str, name: Option<String>, now: NaiveDateTime) -> RemoteCanvas {
    let partial = RuleSet::server().evaluate(prompt);

    let mut canvas = RemoteCanvas::from_canvas(&BusinessCanvas::from_fn(|slot| {
        let mut content = partial.content(slot).map(<[String]>::to_vec).unwrap_or_default();
        if content.is_empty()
            && let Some(line) = fallback(slot)
        {
            content.push(line.to_string());
        }
        CanvasBlock::empty(slot).with_content(content)
    }));

    canvas.id = Some(Uuid::new_v4().to_string());
    canvas.name = Some(name.unwrap_or_else(|| format!("Canvas {}", now.format("%Y-%m-%d %H:%M"))));
    canvas.created_at = Some(now);
    canvas.updated_at = Some(now);
    canvas
}
