//! In-memory note storage.
//!
//! # Responsibility
//! - Hold the screen-lifetime note sequence.
//! - Keep id/order bookkeeping out of the screen state machine.

pub mod note_store;
