//! # Prompt Heuristic Mapper
//!
//! Turns a free-text business idea into a [`PartialCanvas`] by keyword
//! matching.
//!
//! The mapper is a table of independent [`Rule`]s. Each rule names a slot,
//! a [`Trigger`] tested against the prompt, and the lines it [`Emit`]s. Rules
//! run in table order; a rule that fires creates its slot if absent and
//! appends its lines. No rule reads another rule's output.
//!
//! ## Example
//!
//! ```
//! use bizcanvas::canvas::Slot;
//! use bizcanvas::mapper::map_prompt;
//!
//! let partial = map_prompt("20-30대를 위한 구독 앱");
//! assert_eq!(
//!     partial.content(Slot::CustomerSegments).unwrap(),
//!     &["20-30대 타겟 고객".to_string()]
//! );
//! assert!(partial.contains(Slot::KeyResources));
//! ```

mod rules;

use regex::Regex;
use std::sync::LazyLock;

use crate::canvas::{PartialCanvas, Slot};

/// Age-decade notation such as "20-30대" or "20~30대".
static AGE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[-~][0-9]+대").expect("age range pattern is valid"));

/// Condition under which a rule fires.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Fires for every prompt.
    Always,
    /// Any of the words occurs in the lower-cased prompt.
    AnyOf(&'static [&'static str]),
    /// Any `gate` word and any `any_of` word both occur.
    Gated {
        gate: &'static [&'static str],
        any_of: &'static [&'static str],
    },
    /// The original prompt contains at least one age range.
    AgeRange,
}

impl Trigger {
    /// `lowered` must be `prompt.to_lowercase()`.
    fn fires(&self, prompt: &str, lowered: &str) -> bool {
        match self {
            Trigger::Always => true,
            Trigger::AnyOf(words) => contains_any(lowered, words),
            Trigger::Gated { gate, any_of } => {
                contains_any(lowered, gate) && contains_any(lowered, any_of)
            }
            Trigger::AgeRange => AGE_RANGE.is_match(prompt),
        }
    }
}

fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| haystack.contains(w))
}

/// Lines a fired rule appends.
#[derive(Debug, Clone, Copy)]
pub enum Emit {
    /// Fixed lines (possibly none, which still creates the slot).
    Lines(&'static [&'static str]),
    /// One "<range> 타겟 고객" line per age range, in prompt order.
    AgeSegments,
}

impl Emit {
    fn lines(&self, prompt: &str) -> Vec<String> {
        match self {
            Emit::Lines(lines) => lines.iter().map(|l| l.to_string()).collect(),
            Emit::AgeSegments => AGE_RANGE
                .find_iter(prompt)
                .map(|m| format!("{} 타겟 고객", m.as_str()))
                .collect(),
        }
    }
}

/// One `{slot, trigger, emitted lines}` entry.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub slot: Slot,
    pub trigger: Trigger,
    pub emit: Emit,
}

/// An ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl RuleSet {
    /// Rules used by the interactive editor.
    pub fn editor() -> Self {
        Self {
            name: "editor",
            rules: rules::EDITOR,
        }
    }

    /// Bilingual rules used by the canvas API's generate endpoint.
    pub fn server() -> Self {
        Self {
            name: "server",
            rules: rules::SERVER,
        }
    }

    /// Evaluate every rule against `prompt`.
    pub fn evaluate(&self, prompt: &str) -> PartialCanvas {
        let lowered = prompt.to_lowercase();
        let mut partial = PartialCanvas::new();

        for rule in self.rules {
            if rule.trigger.fires(prompt, &lowered) {
                partial.append(rule.slot, rule.emit.lines(prompt));
            }
        }

        tracing::debug!(rules = self.name, slots = partial.len(), "mapped prompt");
        partial
    }
}

/// Map a prompt with the editor rule table.
pub fn map_prompt(prompt: &str) -> PartialCanvas {
    RuleSet::editor().evaluate(prompt)
}
