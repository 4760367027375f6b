//! Core logic for the MyNotes screen.
//! This crate owns note rules and the screen state machine; UI hosts only
//! forward events and draw the returned view.

pub mod config;
pub mod logging;
pub mod model;
pub mod screen;
pub mod store;

pub use config::{ConfigError, EditValidation, ScreenConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    note_text_len, trim_note_text, validate_note_text, Note, NoteId, NoteValidationError,
    MAX_NOTE_CHARS,
};
pub use screen::composer::Composer;
pub use screen::notes_screen::{NotesScreen, ScreenEvent, ScreenOutcome};
pub use screen::overlay::EditOverlay;
pub use screen::view::{
    CommitIcon, HeaderView, InputBarView, ListView, NoteRow, OverlayView, RowAction, ScreenView,
};
pub use store::note_store::NoteStore;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
