//! # Editing Session
//!
//! The single owner of the canvas. Every mutation (prompt suggestions, block
//! edits) goes through a `&mut Session` method, so a host that serializes
//! access to the session serializes all canvas writes.
//!
//! Prompt history and drafts are UI state and live beside the canvas, never
//! inside it.
//!
//! ## Example
//!
//! ```
//! use bizcanvas::canvas::Slot;
//! use bizcanvas::session::Session;
//!
//! let mut session = Session::new();
//! session.prompt_mut().set_input("광고 기반 모바일 앱");
//! assert!(session.submit_prompt().is_some());
//! assert_eq!(session.canvas().revenue_streams.content, vec!["광고 수익"]);
//!
//! session.edit_block(Slot::RevenueStreams, "광고 수익\n\n제휴 수수료");
//! assert_eq!(session.canvas().revenue_streams.content, vec!["광고 수익", "제휴 수수료"]);
//! ```

pub mod prompt;

pub use prompt::{PromptPanel, SOFT_LIMIT, SUBMIT_SHORTCUT};

use chrono::NaiveDate;

use crate::board;
use crate::canvas::{BusinessCanvas, PartialCanvas, Slot, merge};
use crate::editor::BlockEditor;
use crate::error::CanvasError;
use crate::mapper::RuleSet;

/// Canvas plus the prompt panel that feeds it.
#[derive(Debug, Clone)]
pub struct Session {
    canvas: BusinessCanvas,
    prompt: PromptPanel,
    rules: RuleSet,
}

impl Session {
    /// Fresh session with the initial canvas and the editor rule table.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::editor())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            canvas: BusinessCanvas::initial(),
            prompt: PromptPanel::new(),
            rules,
        }
    }

    pub fn canvas(&self) -> &BusinessCanvas {
        &self.canvas
    }

    pub fn prompt(&self) -> &PromptPanel {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut PromptPanel {
        &mut self.prompt
    }

    /// Map a prompt without touching the canvas.
    pub fn suggest(&self, prompt: &str) -> PartialCanvas {
        self.rules.evaluate(prompt)
    }

    /// Submit the prompt panel's input and merge the suggestions.
    ///
    /// Returns the applied suggestions, or `None` if the input was blank.
    pub fn submit_prompt(&mut self) -> Option<PartialCanvas> {
        let prompt = self.prompt.submit()?;
        let partial = self.suggest(&prompt);
        self.canvas = merge(&self.canvas, &partial);
        tracing::info!(
            slots = partial.len(),
            history = self.prompt.history().len(),
            "applied prompt suggestions"
        );
        Some(partial)
    }

    /// Replace one block's content.
    pub fn commit_block(&mut self, slot: Slot, content: Vec<String>) {
        self.canvas.block_mut(slot).content = content;
    }

    /// Apply free-typed text to a block through the block editor's commit path.
    pub fn edit_block(&mut self, slot: Slot, text: &str) -> &[String] {
        let mut editor = BlockEditor::new(slot);
        editor.begin_edit(self.canvas.block(slot));
        editor.set_draft(text);
        if let Some(content) = editor.commit() {
            self.commit_block(slot, content);
        }
        &self.canvas.block(slot).content
    }

    /// Pretty JSON export and its dated file name.
    pub fn export(&self, date: NaiveDate) -> Result<(String, String), CanvasError> {
        Ok((board::export_file_name(date), board::export_json(&self.canvas)?))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
