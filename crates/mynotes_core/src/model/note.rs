//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record rendered by the list.
//! - Normalize and validate user-entered note text.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - Text accepted by `validate_note_text` is trimmed, non-empty and at most
//!   `max_chars` Unicode scalar values long.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// Default upper bound for note text on creation.
///
/// Counted in UTF-16 code units (see `note_text_len`), so characters outside
/// the Basic Multilingual Plane such as emoji count twice.
pub const MAX_NOTE_CHARS: usize = 200;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Sole key for lookup, update and removal.
    pub id: NoteId,
    /// Trimmed note body.
    pub text: String,
}

impl Note {
    /// Creates a note with a freshly generated random ID.
    ///
    /// Text is stored as given; callers validate through
    /// `validate_note_text` first.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a note with a caller-provided ID.
    pub fn with_id(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Length of the note body as measured by `note_text_len`.
    pub fn text_len(&self) -> usize {
        note_text_len(&self.text)
    }
}

/// Reasons a piece of text cannot become a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Trimmed text is empty.
    Empty,
    /// Trimmed text is longer than the configured bound.
    TooLong { len: usize, max: usize },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "note text cannot be empty"),
            Self::TooLong { len, max } => {
                write!(f, "note text has {len} characters, max is {max}")
            }
        }
    }
}

impl Error for NoteValidationError {}

/// Strips leading and trailing whitespace, including U+FEFF.
pub fn trim_note_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length of `text` in UTF-16 code units.
pub fn note_text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Trims `text` and checks it against the creation rules.
///
/// Returns the trimmed slice on success.
///
/// # Errors
/// - `Empty` when nothing is left after trimming.
/// - `TooLong` when the trimmed text is longer than `max_len` UTF-16 units.
pub fn validate_note_text(text: &str, max_len: usize) -> Result<&str, NoteValidationError> {
    let trimmed = trim_note_text(text);
    if trimmed.is_empty() {
        return Err(NoteValidationError::Empty);
    }
    let len = note_text_len(trimmed);
    if len > max_len {
        return Err(NoteValidationError::TooLong { len, max: max_len });
    }
    Ok(trimmed)
}
