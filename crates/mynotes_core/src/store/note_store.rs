//! Ordered in-memory note store.
//!
//! # Responsibility
//! - Provide add/update/remove over the screen's notes.
//! - Enforce creation-time text rules.
//!
//! # Invariants
//! - Note IDs are unique within one store.
//! - Order is newest-first: `add` prepends.
//! - `update` keeps position and ID; `remove` keeps relative order of the rest.
//! - Operations on unknown IDs leave the store untouched.

use crate::model::note::{
    trim_note_text, validate_note_text, Note, NoteId, NoteValidationError, MAX_NOTE_CHARS,
};
use log::debug;

/// Screen-owned ordered note sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
    max_chars: usize,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store with the default length bound.
    pub fn new() -> Self {
        Self::with_max_chars(MAX_NOTE_CHARS)
    }

    /// Creates an empty store with a custom creation length bound.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            notes: Vec::new(),
            max_chars,
        }
    }

    /// Creation length bound in UTF-16 code units.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Creates a note from `text` and puts it first.
    ///
    /// # Contract
    /// - Text is trimmed before validation and storage.
    /// - On error the store is unchanged; the error only explains the no-op.
    pub fn add(&mut self, text: &str) -> Result<Note, NoteValidationError> {
        let trimmed = validate_note_text(text, self.max_chars)?;
        let note = Note::new(trimmed);
        self.notes.insert(0, note.clone());
        debug!(
            "event=note_add module=store status=ok note_id={} len={} total={}",
            note.id,
            note.text_len(),
            self.notes.len()
        );
        Ok(note)
    }

    /// Replaces the text of the note with `id`, trimming the input.
    ///
    /// Applies no length or emptiness rule. Returns `false` when no note has
    /// `id`.
    pub fn update(&mut self, id: NoteId, text: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=store status=skipped reason=not_found note_id={id}");
            return false;
        };
        note.text = trim_note_text(text).to_string();
        debug!(
            "event=note_update module=store status=ok note_id={id} len={}",
            note.text_len()
        );
        true
    }

    /// Like `update`, but first applies the creation rules to `text`.
    ///
    /// Returns `Ok(false)` for unknown IDs.
    pub fn update_checked(&mut self, id: NoteId, text: &str) -> Result<bool, NoteValidationError> {
        let trimmed = validate_note_text(text, self.max_chars)?;
        Ok(self.update(id, trimmed))
    }

    /// Removes the note with `id`, returning it when present.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.position(id)?;
        let removed = self.notes.remove(index);
        debug!(
            "event=note_remove module=store status=ok note_id={id} total={}",
            self.notes.len()
        );
        Some(removed)
    }

    /// Gets one note by ID.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Index of the note with `id` in display order.
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    /// Notes in display order (newest first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NoteStore {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
