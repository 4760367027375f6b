//! Shared text state behind the input bar and the edit overlay field.

/// Text currently typed by the user.
///
/// Bound to exactly one visible field at a time: the input bar while the
/// overlay is closed, the overlay field while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the whole text, as a text-change callback would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
