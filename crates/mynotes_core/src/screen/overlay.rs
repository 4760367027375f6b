//! Edit overlay state.

use crate::model::note::{Note, NoteId};

/// Modal edit state. Visibility is derived from the variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditOverlay {
    #[default]
    Closed,
    /// Snapshot of the note taken when editing started.
    Editing(Note),
}

impl EditOverlay {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Note being edited, if any.
    pub fn target(&self) -> Option<&Note> {
        match self {
            Self::Closed => None,
            Self::Editing(note) => Some(note),
        }
    }

    pub fn target_id(&self) -> Option<NoteId> {
        self.target().map(|note| note.id)
    }
}
