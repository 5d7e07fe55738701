//! # Block Editor
//!
//! Per-block interaction state: a block is either being viewed or edited.
//!
//! ```text
//!            begin_edit
//!  Viewing ─────────────▶ Editing { draft }
//!     ▲                      │
//!     └──── commit/cancel ───┘
//! ```
//!
//! Nothing is written back while typing. [`BlockEditor::commit`] hands the
//! normalized lines to the caller, who owns the canvas and applies them.
//!
//! ## Example
//!
//! ```
//! use bizcanvas::canvas::{BusinessCanvas, Slot};
//! use bizcanvas::editor::BlockEditor;
//!
//! let canvas = BusinessCanvas::initial();
//! let mut editor = BlockEditor::new(Slot::Channels);
//! editor.begin_edit(canvas.block(Slot::Channels));
//! editor.set_draft("웹사이트\n\n  SNS 마케팅 ");
//! assert_eq!(
//!     editor.commit(),
//!     Some(vec!["웹사이트".to_string(), "SNS 마케팅".to_string()])
//! );
//! ```

use serde::Serialize;

use crate::canvas::{CanvasBlock, Slot};

/// Split text on line breaks, trim each line and drop blank ones.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Editor state for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing {
        /// Text being typed
        draft: String,
        /// Text the draft was seeded with
        original: String,
    },
}

/// Read-only rendering of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum BlockView {
    /// One bullet per content item
    Bullets(Vec<String>),
    /// Hint text when the block has no content
    Placeholder(String),
}

/// Viewing/editing state machine for one canvas block.
#[derive(Debug, Clone)]
pub struct BlockEditor {
    slot: Slot,
    state: EditorState,
}

impl BlockEditor {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            state: EditorState::Viewing,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    /// Render `block` for viewing.
    pub fn view(block: &CanvasBlock) -> BlockView {
        if block.content.is_empty() {
            BlockView::Placeholder(block.placeholder.clone())
        } else {
            BlockView::Bullets(block.content.clone())
        }
    }

    /// Enter editing, seeding the draft with the block's lines.
    ///
    /// Re-entering while already editing reseeds the draft.
    pub fn begin_edit(&mut self, block: &CanvasBlock) {
        let text = block.content.join("\n");
        self.state = EditorState::Editing {
            draft: text.clone(),
            original: text,
        };
    }

    /// Replace the draft text. Ignored while viewing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditorState::Editing { draft, .. } = &mut self.state {
            *draft = text.into();
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditorState::Editing { draft, .. } => Some(draft),
            EditorState::Viewing => None,
        }
    }

    /// Finish editing and return the new content for the block.
    ///
    /// Returns `None` when not editing.
    pub fn commit(&mut self) -> Option<Vec<String>> {
        match std::mem::replace(&mut self.state, EditorState::Viewing) {
            EditorState::Editing { draft, .. } => Some(normalize_lines(&draft)),
            EditorState::Viewing => None,
        }
    }

    /// Discard the draft and return to viewing.
    ///
    /// Returns the pre-edit text, or `None` when not editing.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, EditorState::Viewing) {
            EditorState::Editing { original, .. } => Some(original),
            EditorState::Viewing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::BusinessCanvas;

    fn block_with(lines: &[&str]) -> CanvasBlock {
        CanvasBlock::empty(Slot::KeyPartners).with_content(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_normalize_drops_blank_and_trims() {
        assert_eq!(normalize_lines("a\n\nb\n  \nc"), vec!["a", "b", "c"]);
        assert_eq!(normalize_lines("  x  \r\n\ty\t"), vec!["x", "y"]);
        assert!(normalize_lines("\n \n").is_empty());
    }

    #[test]
    fn test_commit_flow() {
        let block = block_with(&["old"]);
        let mut editor = BlockEditor::new(Slot::KeyPartners);
        editor.begin_edit(&block);
        assert_eq!(editor.draft(), Some("old"));

        editor.set_draft("a\n\nb\n  \nc");
        assert_eq!(editor.commit(), Some(vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(editor.state(), &EditorState::Viewing);
    }

    #[test]
    fn test_cancel_restores_original_text() {
        let block = block_with(&["one", "two"]);
        let mut editor = BlockEditor::new(Slot::KeyPartners);
        editor.begin_edit(&block);
        editor.set_draft("changed");
        assert_eq!(editor.cancel(), Some("one\ntwo".to_string()));
        assert!(!editor.is_editing());
        assert_eq!(editor.commit(), None);
    }

    #[test]
    fn test_draft_ignored_while_viewing() {
        let mut editor = BlockEditor::new(Slot::Channels);
        editor.set_draft("typed too early");
        assert_eq!(editor.draft(), None);
        assert_eq!(editor.cancel(), None);
    }

    #[test]
    fn test_view_uses_placeholder_when_empty() {
        let canvas = BusinessCanvas::initial();
        assert_eq!(
            BlockEditor::view(canvas.block(Slot::RevenueStreams)),
            BlockView::Placeholder("• 자산 판매\n• 사용료\n• 구독료\n• 라이선스".into())
        );
        assert_eq!(
            BlockEditor::view(&block_with(&["a"])),
            BlockView::Bullets(vec!["a".into()])
        );
    }
}
