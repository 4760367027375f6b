//! Notes screen state machine and view projection.
//!
//! # Responsibility
//! - Own the store plus transient UI state (composer, edit overlay).
//! - Route user events to store mutations.
//! - Project state into a toolkit-agnostic view model.
//!
//! # Invariants
//! - All mutations complete synchronously inside one event call.
//! - The commit action is the only mode-dependent branch.

pub mod composer;
pub mod notes_screen;
pub mod overlay;
pub mod view;
