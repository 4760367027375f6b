//! Domain model for the notes screen.
//!
//! # Responsibility
//! - Define the one domain record (`Note`) owned by the note store.
//! - Own the creation-time text rules shared by store and screen.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard remove; there are no tombstones.

pub mod note;
