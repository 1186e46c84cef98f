use serde::{Deserialize, Serialize};

/// A single planner entry: what to do, and whether it is done.
///
/// The serialized form is exactly `{"text": .., "completed": ..}`; the
/// stored task file is a plain JSON array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text as entered (trimmed, never empty)
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }

    /// Label for the toggle action: done tasks get reactivated
    pub fn toggle_label(&self) -> &'static str {
        if self.completed { "reactivate" } else { "complete" }
    }
}
