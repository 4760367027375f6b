//! Notes screen: one owned state value driven by user events.
//!
//! # Responsibility
//! - Hold the note store, the composer and the edit overlay.
//! - Dispatch the commit action to add or save depending on overlay state.
//! - Raise a one-shot entrance cue after each successful add.
//!
//! # Invariants
//! - Leaving edit mode (save or cancel) always clears the composer.
//! - Entering edit mode seeds the composer from the note's current text.
//! - A rejected add leaves both store and composer unchanged.
//! - Save writes by ID only; a note deleted mid-edit turns save into a no-op.

use crate::config::{EditValidation, ScreenConfig};
use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::screen::composer::Composer;
use crate::screen::overlay::EditOverlay;
use crate::screen::view::{project, ScreenView};
use crate::store::note_store::NoteStore;
use log::{debug, info};

/// User interaction delivered to `NotesScreen::handle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Text-change callback of whichever field is visible.
    InputChanged(String),
    /// Commit button press or field submit.
    Submit,
    StartEdit(NoteId),
    SaveEdit,
    CancelEdit,
    Delete(NoteId),
}

/// What an event did to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOutcome {
    InputChanged,
    Added(Note),
    /// Commit input failed creation rules; nothing changed.
    Rejected(NoteValidationError),
    EditStarted(NoteId),
    /// Overlay closed after save; `found` is false when the note was gone.
    Saved { id: NoteId, found: bool },
    EditCancelled,
    Deleted(Note),
    /// Event had no effect in the current state.
    Ignored,
}

impl ScreenOutcome {
    /// Whether the note store changed.
    pub fn mutated_store(&self) -> bool {
        matches!(
            self,
            Self::Added(_) | Self::Deleted(_) | Self::Saved { found: true, .. }
        )
    }
}

/// State owner for one notes screen.
#[derive(Debug, Clone, Default)]
pub struct NotesScreen {
    config: ScreenConfig,
    store: NoteStore,
    composer: Composer,
    overlay: EditOverlay,
    entrance_cue: Option<NoteId>,
}

impl NotesScreen {
    /// Creates an empty screen with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScreenConfig::default())
    }

    pub fn with_config(config: ScreenConfig) -> Self {
        Self {
            store: NoteStore::with_max_chars(config.max_note_chars),
            config,
            composer: Composer::new(),
            overlay: EditOverlay::Closed,
            entrance_cue: None,
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn overlay(&self) -> &EditOverlay {
        &self.overlay
    }

    /// Applies one user event.
    pub fn handle(&mut self, event: ScreenEvent) -> ScreenOutcome {
        match event {
            ScreenEvent::InputChanged(text) => {
                self.set_input(text);
                ScreenOutcome::InputChanged
            }
            ScreenEvent::Submit => self.submit(),
            ScreenEvent::StartEdit(id) => self.start_edit(id),
            ScreenEvent::SaveEdit => self.save_edit(),
            ScreenEvent::CancelEdit => self.cancel_edit(),
            ScreenEvent::Delete(id) => self.delete(id),
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.composer.set_text(text);
    }

    /// Commit action: saves while editing, adds otherwise.
    pub fn submit(&mut self) -> ScreenOutcome {
        if self.overlay.is_visible() {
            self.save_edit()
        } else {
            self.add_note()
        }
    }

    /// Adds the composer text as a new first note.
    pub fn add_note(&mut self) -> ScreenOutcome {
        match self.store.add(self.composer.text()) {
            Ok(note) => {
                self.composer.clear();
                self.entrance_cue = Some(note.id);
                info!(
                    "event=note_added module=screen status=ok note_id={} total={}",
                    note.id,
                    self.store.len()
                );
                ScreenOutcome::Added(note)
            }
            Err(err) => {
                debug!("event=note_added module=screen status=rejected reason={err}");
                ScreenOutcome::Rejected(err)
            }
        }
    }

    /// Opens the overlay on note `id`, seeding the composer with its text.
    ///
    /// Retargets when already editing. Unknown IDs are ignored.
    pub fn start_edit(&mut self, id: NoteId) -> ScreenOutcome {
        let Some(note) = self.store.get(id).cloned() else {
            debug!("event=edit_start module=screen status=skipped reason=not_found note_id={id}");
            return ScreenOutcome::Ignored;
        };
        self.composer.set_text(note.text.as_str());
        self.overlay = EditOverlay::Editing(note);
        debug!("event=edit_start module=screen status=ok note_id={id}");
        ScreenOutcome::EditStarted(id)
    }

    /// Writes the composer text into the edited note and closes the overlay.
    pub fn save_edit(&mut self) -> ScreenOutcome {
        let Some(id) = self.overlay.target_id() else {
            return ScreenOutcome::Ignored;
        };

        let found = match self.config.edit_validation {
            EditValidation::Unchecked => self.store.update(id, self.composer.text()),
            EditValidation::Enforced => match self.store.update_checked(id, self.composer.text())
            {
                Ok(found) => found,
                Err(err) => {
                    debug!(
                        "event=edit_save module=screen status=rejected note_id={id} reason={err}"
                    );
                    return ScreenOutcome::Rejected(err);
                }
            },
        };

        self.close_overlay();
        info!(
            "event=edit_save module=screen status=ok note_id={id} found={found} validation={}",
            self.config.edit_validation.as_str()
        );
        ScreenOutcome::Saved { id, found }
    }

    /// Closes the overlay without touching the store.
    pub fn cancel_edit(&mut self) -> ScreenOutcome {
        let Some(id) = self.overlay.target_id() else {
            return ScreenOutcome::Ignored;
        };
        self.close_overlay();
        debug!("event=edit_cancel module=screen status=ok note_id={id}");
        ScreenOutcome::EditCancelled
    }

    /// Removes note `id`. Unknown IDs are ignored.
    pub fn delete(&mut self, id: NoteId) -> ScreenOutcome {
        match self.store.remove(id) {
            Some(note) => {
                if self.entrance_cue == Some(id) {
                    self.entrance_cue = None;
                }
                info!(
                    "event=note_deleted module=screen status=ok note_id={id} total={}",
                    self.store.len()
                );
                ScreenOutcome::Deleted(note)
            }
            None => ScreenOutcome::Ignored,
        }
    }

    /// Takes the pending entrance-animation cue, if any.
    ///
    /// The cue names the most recently added note and is returned once.
    pub fn take_entrance_cue(&mut self) -> Option<NoteId> {
        self.entrance_cue.take()
    }

    /// Current view projection.
    pub fn view(&self) -> ScreenView {
        project(&self.store, &self.composer, &self.overlay)
    }

    fn close_overlay(&mut self) {
        self.overlay = EditOverlay::Closed;
        self.composer.clear();
    }
}
