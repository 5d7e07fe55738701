//! Rule tables.
//!
//! Within one slot, table order is content order.

use super::{Emit, Rule, Trigger};
use crate::canvas::Slot;

const fn rule(slot: Slot, trigger: Trigger, emit: Emit) -> Rule {
    Rule {
        slot,
        trigger,
        emit,
    }
}

const fn any(words: &'static [&'static str], lines: &'static [&'static str]) -> (Trigger, Emit) {
    (Trigger::AnyOf(words), Emit::Lines(lines))
}

const fn always(lines: &'static [&'static str]) -> (Trigger, Emit) {
    (Trigger::Always, Emit::Lines(lines))
}

const fn gated(
    gate: &'static [&'static str],
    words: &'static [&'static str],
    lines: &'static [&'static str],
) -> (Trigger, Emit) {
    (Trigger::Gated { gate, any_of: words }, Emit::Lines(lines))
}

const fn at(slot: Slot, entry: (Trigger, Emit)) -> Rule {
    rule(slot, entry.0, entry.1)
}

// ============================================================================
// EDITOR RULES
// ============================================================================

const EDITOR_OFFERING: &[&str] = &["앱", "서비스", "플랫폼"];

pub(super) const EDITOR: &[Rule] = &[
    // Value propositions: the opener alone yields an empty slot
    at(Slot::ValuePropositions, any(EDITOR_OFFERING, &[])),
    at(
        Slot::ValuePropositions,
        gated(EDITOR_OFFERING, &["맞춤", "개인"], &["개인 맞춤형 서비스 제공"]),
    ),
    at(
        Slot::ValuePropositions,
        gated(EDITOR_OFFERING, &["편리", "간편"], &["사용자 편의성 극대화"]),
    ),
    at(
        Slot::ValuePropositions,
        gated(EDITOR_OFFERING, &["저렴", "무료"], &["비용 효율적인 솔루션"]),
    ),
    rule(Slot::CustomerSegments, Trigger::AgeRange, Emit::AgeSegments),
    at(Slot::Channels, any(&["앱", "모바일"], &["모바일 앱 스토어", "앱 내 마케팅"])),
    at(Slot::Channels, any(&["온라인", "웹"], &["웹사이트", "SNS 마케팅"])),
    at(Slot::RevenueStreams, any(&["구독", "월정액"], &["월 구독료", "프리미엄 기능 요금"])),
    at(Slot::RevenueStreams, any(&["광고"], &["광고 수익"])),
    at(
        Slot::KeyActivities,
        any(&["개발", "앱", "플랫폼"], &["플랫폼 개발 및 유지보수", "사용자 경험 최적화"]),
    ),
    at(Slot::KeyActivities, any(&["데이터", "분석"], &["데이터 수집 및 분석"])),
    at(Slot::KeyResources, always(&["개발팀", "기술 인프라", "사용자 데이터베이스"])),
    at(
        Slot::CostStructure,
        always(&["개발 및 유지보수 비용", "마케팅 비용", "서버 및 인프라 비용"]),
    ),
];

// ============================================================================
// SERVER RULES
// ============================================================================

const OFFERING: &[&str] = &["앱", "app", "서비스", "service", "플랫폼", "platform"];
const MOBILE: &[&str] = &["앱", "app", "모바일", "mobile"];
const ONLINE: &[&str] = &["온라인", "online", "웹", "web"];
const OFFLINE: &[&str] = &["오프라인", "offline", "매장", "store"];
const ANY_CHANNEL: &[&str] = &[
    "앱", "app", "모바일", "mobile", "온라인", "online", "웹", "web", "오프라인", "offline",
    "매장", "store",
];
const AI: &[&str] = &["ai", "인공지능", "machine learning", "ml"];
const DATA: &[&str] = &["데이터", "data"];
const CONTENT: &[&str] = &["콘텐츠", "content"];

pub(super) const SERVER: &[Rule] = &[
    // Value propositions
    at(Slot::ValuePropositions, gated(OFFERING, &["맞춤", "개인", "personal", "custom"], &["개인 맞춤형 서비스 제공"])),
    at(Slot::ValuePropositions, gated(OFFERING, &["편리", "간편", "convenient", "easy"], &["사용자 편의성 극대화"])),
    at(Slot::ValuePropositions, gated(OFFERING, &["저렴", "무료", "free", "cheap"], &["비용 효율적인 솔루션"])),
    at(Slot::ValuePropositions, gated(OFFERING, &["빠른", "fast", "quick", "신속"], &["신속한 서비스 제공"])),
    // Customer segments
    rule(Slot::CustomerSegments, Trigger::AgeRange, Emit::AgeSegments),
    at(Slot::CustomerSegments, any(&["기업", "b2b", "business", "회사"], &["B2B 기업 고객"])),
    at(Slot::CustomerSegments, any(&["개인", "b2c", "consumer", "일반"], &["B2C 개인 고객"])),
    at(Slot::CustomerSegments, any(&["학생", "student"], &["학생 및 교육 기관"])),
    // Channels
    at(Slot::Channels, any(MOBILE, &["모바일 앱 스토어", "앱 내 마케팅"])),
    at(Slot::Channels, any(ONLINE, &["웹사이트", "SNS 마케팅"])),
    at(Slot::Channels, any(OFFLINE, &["오프라인 매장"])),
    // Revenue streams
    at(Slot::RevenueStreams, any(&["구독", "subscription", "월정액"], &["월 구독료", "프리미엄 기능 요금"])),
    at(Slot::RevenueStreams, any(&["광고", "ad", "advertisement"], &["광고 수익"])),
    at(Slot::RevenueStreams, any(&["판매", "sale", "sell"], &["제품/서비스 판매"])),
    at(Slot::RevenueStreams, any(&["수수료", "commission", "fee"], &["중개 수수료"])),
    // Key activities
    at(Slot::KeyActivities, any(&["개발", "develop", "앱", "app", "플랫폼"], &["플랫폼 개발 및 유지보수", "사용자 경험 최적화"])),
    at(Slot::KeyActivities, any(&["데이터", "data", "분석", "analysis"], &["데이터 수집 및 분석"])),
    at(Slot::KeyActivities, any(&["마케팅", "marketing"], &["마케팅 및 고객 획득"])),
    at(Slot::KeyActivities, any(CONTENT, &["콘텐츠 제작 및 관리"])),
    // Key resources
    at(Slot::KeyResources, always(&["개발팀", "기술 인프라"])),
    at(Slot::KeyResources, any(AI, &["AI/ML 모델"])),
    at(Slot::KeyResources, any(DATA, &["사용자 데이터베이스"])),
    at(Slot::KeyResources, any(CONTENT, &["콘텐츠 라이브러리"])),
    // Key partners; a marketing partner whenever any channel rule fires
    at(Slot::KeyPartners, any(&["api", "연동", "integration"], &["외부 API 제공업체"])),
    at(Slot::KeyPartners, any(ANY_CHANNEL, &["마케팅 파트너"])),
    at(Slot::KeyPartners, any(&["결제", "payment"], &["결제 서비스 제공업체"])),
    // Customer relationships
    at(Slot::CustomerRelationships, always(&["자동화된 서비스"])),
    at(Slot::CustomerRelationships, any(&["커뮤니티", "community"], &["커뮤니티 지원"])),
    at(Slot::CustomerRelationships, any(&["premium", "프리미엄", "vip"], &["프리미엄 고객 전담 지원"])),
    at(Slot::CustomerRelationships, any(&["개인", "personal"], &["개인화된 서비스"])),
    // Cost structure; AI training follows the AI resource rule
    at(Slot::CostStructure, always(&["개발 및 유지보수 비용", "마케팅 비용"])),
    at(Slot::CostStructure, any(&["서버", "server", "클라우드", "cloud"], &["서버 및 인프라 비용"])),
    at(Slot::CostStructure, any(AI, &["AI 모델 훈련 비용"])),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_slots_have_unconditional_rules() {
        for table in [EDITOR, SERVER] {
            for slot in [Slot::KeyResources, Slot::CostStructure] {
                assert!(
                    table
                        .iter()
                        .any(|r| r.slot == slot && matches!(r.trigger, Trigger::Always)),
                    "{slot} has no unconditional rule"
                );
            }
        }
    }

    #[test]
    fn test_any_channel_covers_every_channel_trigger() {
        for word in MOBILE.iter().chain(ONLINE).chain(OFFLINE) {
            assert!(ANY_CHANNEL.contains(word), "{word} missing");
        }
    }
}
