//! Flutter-facing bindings for the MyNotes core.

pub mod api;
