//! Toolkit-agnostic view model for the notes screen.
//!
//! # Responsibility
//! - Project store + transient state into what the UI must draw.
//! - Name icons, labels and animation parameters; drawing them is the host
//!   toolkit's job.
//!
//! # Invariants
//! - Rows are keyed by note ID and follow store order (newest first).
//! - An empty store projects to a placeholder, never to zero rows.
//! - The composer text shows in exactly one field.

use crate::model::note::NoteId;
use crate::screen::composer::Composer;
use crate::screen::overlay::EditOverlay;
use crate::store::note_store::NoteStore;

pub const HEADER_ICON: &str = "note.text";
pub const HEADER_TITLE: &str = "My Notes";
pub const HEADER_SUBTITLE: &str = "Organize your ideas in style";
pub const EMPTY_LIST_MESSAGE: &str = "No notes yet. Start writing!";
pub const INPUT_PLACEHOLDER: &str = "Write a note...";
pub const OVERLAY_TITLE: &str = "Edit Note";
pub const OVERLAY_PLACEHOLDER: &str = "Edit your note";
pub const OVERLAY_CANCEL_LABEL: &str = "Cancel";
pub const OVERLAY_SAVE_LABEL: &str = "Save";

/// Scale a freshly added row springs from.
pub const ENTRANCE_SCALE_FROM: f32 = 0.7;
/// Scale a freshly added row settles at.
pub const ENTRANCE_SCALE_TO: f32 = 1.0;
pub const ENTRANCE_SPRING_FRICTION: f32 = 6.0;

/// Full screen projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub header: HeaderView,
    pub list: ListView,
    pub input_bar: InputBarView,
    /// `Some` while the edit overlay is visible.
    pub overlay: Option<OverlayView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Default for HeaderView {
    fn default() -> Self {
        Self {
            icon: HEADER_ICON,
            title: HEADER_TITLE,
            subtitle: HEADER_SUBTITLE,
        }
    }
}

/// Note list body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty { message: &'static str },
    Rows(Vec<NoteRow>),
}

impl ListView {
    /// Visible rows; empty for the placeholder variant.
    pub fn rows(&self) -> &[NoteRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    /// Stable row key.
    pub key: NoteId,
    pub text: String,
    pub actions: [RowAction; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Edit => "create-outline",
            Self::Delete => "trash-bin-outline",
        }
    }
}

/// Trailing control of the input bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitIcon {
    Add,
    Save,
}

impl CommitIcon {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Save => "checkmark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBarView {
    pub placeholder: &'static str,
    pub text: String,
    pub commit_icon: CommitIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub text: String,
    pub cancel_label: &'static str,
    pub save_label: &'static str,
}

/// Projects screen state into a `ScreenView`.
pub fn project(store: &NoteStore, composer: &Composer, overlay: &EditOverlay) -> ScreenView {
    let list = if store.is_empty() {
        ListView::Empty {
            message: EMPTY_LIST_MESSAGE,
        }
    } else {
        ListView::Rows(
            store
                .iter()
                .map(|note| NoteRow {
                    key: note.id,
                    text: note.text.clone(),
                    actions: [RowAction::Edit, RowAction::Delete],
                })
                .collect(),
        )
    };

    let (input_bar, overlay) = match overlay {
        EditOverlay::Closed => (
            InputBarView {
                placeholder: INPUT_PLACEHOLDER,
                text: composer.text().to_string(),
                commit_icon: CommitIcon::Add,
            },
            None,
        ),
        EditOverlay::Editing(_) => (
            InputBarView {
                placeholder: INPUT_PLACEHOLDER,
                text: String::new(),
                commit_icon: CommitIcon::Save,
            },
            Some(OverlayView {
                title: OVERLAY_TITLE,
                placeholder: OVERLAY_PLACEHOLDER,
                text: composer.text().to_string(),
                cancel_label: OVERLAY_CANCEL_LABEL,
                save_label: OVERLAY_SAVE_LABEL,
            }),
        ),
    };

    ScreenView {
        header: HeaderView::default(),
        list,
        input_bar,
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::{project, CommitIcon, ListView, RowAction, EMPTY_LIST_MESSAGE};
    use crate::model::note::Note;
    use crate::screen::composer::Composer;
    use crate::screen::overlay::EditOverlay;
    use crate::store::note_store::NoteStore;

    #[test]
    fn empty_store_projects_placeholder() {
        let view = project(&NoteStore::new(), &Composer::new(), &EditOverlay::Closed);
        assert_eq!(
            view.list,
            ListView::Empty {
                message: EMPTY_LIST_MESSAGE
            }
        );
        assert!(view.list.rows().is_empty());
        assert!(view.overlay.is_none());
    }

    #[test]
    fn rows_follow_store_order_with_both_actions() {
        let mut store = NoteStore::new();
        let older = store.add("older").unwrap();
        let newer = store.add("newer").unwrap();

        let view = project(&store, &Composer::new(), &EditOverlay::Closed);
        let keys = view.list.rows().iter().map(|row| row.key).collect::<Vec<_>>();
        assert_eq!(keys, vec![newer.id, older.id]);
        assert_eq!(
            view.list.rows()[0].actions,
            [RowAction::Edit, RowAction::Delete]
        );
        assert_eq!(RowAction::Delete.icon(), "trash-bin-outline");
    }

    #[test]
    fn editing_moves_composer_text_into_overlay() {
        let mut composer = Composer::new();
        composer.set_text("draft");
        let overlay = EditOverlay::Editing(Note::new("draft"));

        let view = project(&NoteStore::new(), &composer, &overlay);
        assert_eq!(view.input_bar.text, "");
        assert_eq!(view.input_bar.commit_icon, CommitIcon::Save);
        assert_eq!(view.overlay.expect("overlay visible").text, "draft");
    }
}
