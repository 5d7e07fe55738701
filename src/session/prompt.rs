//! Prompt panel: input text plus a session-only history.

use serde::Serialize;

/// Display-only character cap; longer input is still accepted.
pub const SOFT_LIMIT: usize = 500;

/// Keyboard shortcut the frontend binds to submit.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+Enter";

/// Prompt input and history of submitted prompts (oldest first).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPanel {
    input: String,
    history: Vec<String>,
}

impl PromptPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Characters typed so far, as shown next to the soft limit.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn over_soft_limit(&self) -> bool {
        self.char_count() > SOFT_LIMIT
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Submit the current input.
    ///
    /// Whitespace-only input is ignored and left in place. Otherwise the
    /// prompt is recorded verbatim, the input is cleared, and the prompt is
    /// returned for the host to map.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let prompt = std::mem::take(&mut self.input);
        self.history.push(prompt.clone());
        Some(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_verbatim_and_clears() {
        let mut panel = PromptPanel::new();
        panel.set_input("  구독 앱  ");
        assert_eq!(panel.submit(), Some("  구독 앱  ".to_string()));
        assert_eq!(panel.input(), "");
        assert_eq!(panel.history(), &["  구독 앱  ".to_string()]);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut panel = PromptPanel::new();
        panel.set_input(" \n\t");
        assert_eq!(panel.submit(), None);
        assert!(panel.history().is_empty());
        assert_eq!(panel.input(), " \n\t");
    }

    #[test]
    fn test_history_is_oldest_first() {
        let mut panel = PromptPanel::new();
        for prompt in ["first", "second", "third"] {
            panel.set_input(prompt);
            panel.submit();
        }
        assert_eq!(panel.history(), &["first", "second", "third"]);
    }

    #[test]
    fn test_soft_limit_counts_characters_not_bytes() {
        let mut panel = PromptPanel::new();
        panel.set_input("가".repeat(SOFT_LIMIT));
        assert_eq!(panel.char_count(), SOFT_LIMIT);
        assert!(!panel.over_soft_limit());

        panel.set_input("가".repeat(SOFT_LIMIT + 1));
        assert!(panel.over_soft_limit());
        assert!(panel.submit().is_some());
    }
}
