//! Scripted user interface for tests.

use super::UserInterface;
use crate::error::Result;

/// Records output and replays scripted confirmation answers.
#[derive(Debug, Default)]
pub struct MockUi {
    /// Messages printed so far (all severities).
    pub messages: Vec<String>,
    /// Questions asked so far.
    pub questions: Vec<String>,
    /// Answers returned by `confirm`, consumed front to back. When empty,
    /// `confirm` answers no.
    pub answers: Vec<bool>,
}

impl MockUi {
    /// Create a mock with no scripted answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirmation.
    pub fn with_answer(mut self, answer: bool) -> Self {
        self.answers.push(answer);
        self
    }

    /// Whether any recorded message contains `needle`.
    pub fn saw_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUi {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warn(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
        self.questions.push(question.to_string());
        if self.answers.is_empty() {
            Ok(false)
        } else {
            Ok(self.answers.remove(0))
        }
    }
}
