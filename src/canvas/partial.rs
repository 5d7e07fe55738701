//! Partial suggestion set: the subset of blocks proposed for one prompt.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CanvasBlock, Slot};

/// Suggested content for a subset of the nine slots.
///
/// A slot that is absent means "no change". A slot that is present with an
/// empty content list is a real suggestion and is kept distinct.
///
/// Serializes as an object keyed by camelCase slot name, each value a block
/// fragment with the slot's id and title and an empty placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialCanvas {
    blocks: BTreeMap<Slot, CanvasBlock>,
}

impl PartialCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the slot if absent; existing content is kept.
    pub fn open(&mut self, slot: Slot) -> &mut Vec<String> {
        &mut self
            .blocks
            .entry(slot)
            .or_insert_with(|| CanvasBlock::fragment(slot, Vec::new()))
            .content
    }

    /// Append lines to a slot, creating it if needed.
    pub fn append<I, S>(&mut self, slot: Slot, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open(slot).extend(lines.into_iter().map(Into::into));
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.blocks.contains_key(&slot)
    }

    /// Suggested content for a slot, `None` when the slot is absent.
    pub fn content(&self, slot: Slot) -> Option<&[String]> {
        self.blocks.get(&slot).map(|b| b.content.as_slice())
    }

    /// Present slots in canonical order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.blocks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
