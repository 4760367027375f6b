//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen sessions to Dart via FRB as sync calls.
//! - Flatten core view models into string-keyed DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One session owns one `NotesScreen`; closing it drops its notes.
//! - Unknown sessions and malformed note IDs yield `ok = false`, never a
//!   panic.

use log::{info, warn};
use mynotes_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ListView, NoteId, NotesScreen, ScreenConfig, ScreenEvent, ScreenOutcome,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

static SCREENS: Lazy<Mutex<HashMap<String, NotesScreen>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One visible note row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRowItem {
    /// Stable note ID in string form; use as the list key.
    pub note_id: String,
    pub text: String,
    pub edit_icon: String,
    pub delete_icon: String,
}

/// Edit overlay contents while it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayItem {
    pub title: String,
    pub placeholder: String,
    pub text: String,
    pub cancel_label: String,
    pub save_label: String,
}

/// Flattened screen view for Dart widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub session_id: String,
    pub header_icon: String,
    pub header_title: String,
    pub header_subtitle: String,
    /// Newest-first rows; empty when `empty_message` is set.
    pub rows: Vec<NoteRowItem>,
    pub empty_message: Option<String>,
    pub input_placeholder: String,
    pub input_text: String,
    /// `add` or `checkmark`.
    pub commit_icon: String,
    pub overlay: Option<OverlayItem>,
    /// Note to play the entrance animation on; delivered once.
    pub entrance_note_id: Option<String>,
}

/// Generic response envelope for screen calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenActionResponse {
    pub ok: bool,
    /// Human-readable outcome for diagnostics.
    pub message: String,
    /// Screen state after the call; `None` when the call failed.
    pub snapshot: Option<ScreenSnapshot>,
}

impl ScreenActionResponse {
    fn success(message: impl Into<String>, snapshot: ScreenSnapshot) -> Self {
        Self {
            ok: true,
            message: message.into(),
            snapshot: Some(snapshot),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            snapshot: None,
        }
    }
}

/// Opens a new empty screen session.
///
/// Configuration comes from `MYNOTES_*` environment variables; malformed
/// values fall back to defaults.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_open() -> ScreenActionResponse {
    let config = ScreenConfig::from_env().unwrap_or_else(|err| {
        warn!("event=screen_open module=ffi status=degraded reason=config error={err}");
        ScreenConfig::default()
    });
    let session_id = Uuid::new_v4().to_string();
    let mut screen = NotesScreen::with_config(config);
    let snapshot = to_snapshot(&session_id, &mut screen);

    lock_screens().insert(session_id.clone(), screen);
    info!("event=screen_open module=ffi status=ok session_id={session_id}");
    ScreenActionResponse::success("Screen opened.", snapshot)
}

/// Closes a screen session and drops its notes.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown session returns `ok = false`.
/// - Returns no snapshot; the session ID is invalid afterwards.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_close(session_id: String) -> ScreenActionResponse {
    match lock_screens().remove(&session_id) {
        Some(_) => {
            info!("event=screen_close module=ffi status=ok session_id={session_id}");
            ScreenActionResponse {
                ok: true,
                message: "Screen closed.".to_string(),
                snapshot: None,
            }
        }
        None => unknown_session(&session_id),
    }
}

/// Returns the current screen state.
///
/// # FFI contract
/// - Sync call, in-memory only; does not change notes.
/// - Delivers and consumes a pending entrance cue.
/// - Unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_snapshot(session_id: String) -> ScreenActionResponse {
    with_screen(&session_id, |_| "Snapshot.".to_string())
}

/// Text-change callback of the visible field.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Replaces the whole composer text; the store is untouched.
/// - Unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_set_input(session_id: String, text: String) -> ScreenActionResponse {
    dispatch(&session_id, ScreenEvent::InputChanged(text))
}

/// Commit button or field submit: saves while editing, adds otherwise.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Rejected input still returns `ok = true`; the message says it was ignored.
/// - Unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_submit(session_id: String) -> ScreenActionResponse {
    dispatch(&session_id, ScreenEvent::Submit)
}

/// Opens the edit overlay on `note_id`, seeding the input with its text.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown note ID is a no-op with `ok = true`.
/// - Malformed note ID or unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_start_edit(session_id: String, note_id: String) -> ScreenActionResponse {
    match parse_note_id(&note_id) {
        Ok(id) => dispatch(&session_id, ScreenEvent::StartEdit(id)),
        Err(response) => response,
    }
}

/// Saves the input into the edited note and closes the overlay.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - No-op with `ok = true` when the overlay is closed.
/// - Unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_save_edit(session_id: String) -> ScreenActionResponse {
    dispatch(&session_id, ScreenEvent::SaveEdit)
}

/// Closes the edit overlay without changing notes and clears the input.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - No-op with `ok = true` when the overlay is closed.
/// - Unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_cancel_edit(session_id: String) -> ScreenActionResponse {
    dispatch(&session_id, ScreenEvent::CancelEdit)
}

/// Removes `note_id` from the session's notes.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown note ID is a no-op with `ok = true`.
/// - Malformed note ID or unknown session returns `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_delete(session_id: String, note_id: String) -> ScreenActionResponse {
    match parse_note_id(&note_id) {
        Ok(id) => dispatch(&session_id, ScreenEvent::Delete(id)),
        Err(response) => response,
    }
}

fn dispatch(session_id: &str, event: ScreenEvent) -> ScreenActionResponse {
    with_screen(session_id, |screen| outcome_message(&screen.handle(event)))
}

fn with_screen(
    session_id: &str,
    f: impl FnOnce(&mut NotesScreen) -> String,
) -> ScreenActionResponse {
    let mut screens = lock_screens();
    let Some(screen) = screens.get_mut(session_id) else {
        return unknown_session(session_id);
    };
    let message = f(screen);
    let snapshot = to_snapshot(session_id, screen);
    ScreenActionResponse::success(message, snapshot)
}

fn lock_screens() -> std::sync::MutexGuard<'static, HashMap<String, NotesScreen>> {
    SCREENS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unknown_session(session_id: &str) -> ScreenActionResponse {
    warn!("event=screen_lookup module=ffi status=error reason=unknown_session session_id={session_id}");
    ScreenActionResponse::failure(format!("unknown screen session: `{session_id}`"))
}

fn parse_note_id(raw: &str) -> Result<NoteId, ScreenActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|err| ScreenActionResponse::failure(format!("invalid note id `{raw}`: {err}")))
}

fn outcome_message(outcome: &ScreenOutcome) -> String {
    match outcome {
        ScreenOutcome::InputChanged => "Input updated.".to_string(),
        ScreenOutcome::Added(_) => "Note created.".to_string(),
        ScreenOutcome::Rejected(err) => format!("Ignored: {err}."),
        ScreenOutcome::EditStarted(_) => "Editing note.".to_string(),
        ScreenOutcome::Saved { found: true, .. } => "Note saved.".to_string(),
        ScreenOutcome::Saved { found: false, .. } => "Note no longer exists.".to_string(),
        ScreenOutcome::EditCancelled => "Edit cancelled.".to_string(),
        ScreenOutcome::Deleted(_) => "Note deleted.".to_string(),
        ScreenOutcome::Ignored => "No change.".to_string(),
    }
}

fn to_snapshot(session_id: &str, screen: &mut NotesScreen) -> ScreenSnapshot {
    let entrance_note_id = screen.take_entrance_cue().map(|id| id.to_string());
    let view = screen.view();
    let (rows, empty_message) = match view.list {
        ListView::Empty { message } => (Vec::new(), Some(message.to_string())),
        ListView::Rows(rows) => (
            rows.into_iter()
                .map(|row| NoteRowItem {
                    note_id: row.key.to_string(),
                    text: row.text,
                    edit_icon: row.actions[0].icon().to_string(),
                    delete_icon: row.actions[1].icon().to_string(),
                })
                .collect(),
            None,
        ),
    };

    ScreenSnapshot {
        session_id: session_id.to_string(),
        header_icon: view.header.icon.to_string(),
        header_title: view.header.title.to_string(),
        header_subtitle: view.header.subtitle.to_string(),
        rows,
        empty_message,
        input_placeholder: view.input_bar.placeholder.to_string(),
        input_text: view.input_bar.text,
        commit_icon: view.input_bar.commit_icon.icon().to_string(),
        overlay: view.overlay.map(|overlay| OverlayItem {
            title: overlay.title.to_string(),
            placeholder: overlay.placeholder.to_string(),
            text: overlay.text,
            cancel_label: overlay.cancel_label.to_string(),
            save_label: overlay.save_label.to_string(),
        }),
        entrance_note_id,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, screen_cancel_edit, screen_close, screen_delete,
        screen_open, screen_save_edit, screen_set_input, screen_snapshot, screen_start_edit,
        screen_submit, ScreenSnapshot,
    };

    fn open() -> String {
        let opened = screen_open();
        assert!(opened.ok, "{}", opened.message);
        opened.snapshot.expect("open returns snapshot").session_id
    }

    fn snapshot(session_id: &str) -> ScreenSnapshot {
        screen_snapshot(session_id.to_string())
            .snapshot
            .expect("session should exist")
    }

    fn add(session_id: &str, text: &str) -> String {
        screen_set_input(session_id.to_string(), text.to_string());
        let response = screen_submit(session_id.to_string());
        assert!(response.ok, "{}", response.message);
        response
            .snapshot
            .and_then(|snapshot| snapshot.entrance_note_id)
            .expect("add should raise entrance cue")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn new_session_shows_placeholder() {
        let session_id = open();
        let snap = snapshot(&session_id);
        assert!(snap.rows.is_empty());
        assert!(snap.empty_message.is_some());
        assert_eq!(snap.commit_icon, "add");
        assert!(snap.overlay.is_none());
    }

    #[test]
    fn submit_adds_newest_first() {
        let session_id = open();
        let first = add(&session_id, "first");
        let second = add(&session_id, "second");

        let snap = snapshot(&session_id);
        let ids = snap
            .rows
            .iter()
            .map(|row| row.note_id.clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(snap.entrance_note_id, None);
        assert_eq!(snap.rows[0].delete_icon, "trash-bin-outline");
    }

    #[test]
    fn edit_flow_saves_through_submit() {
        let session_id = open();
        let note_id = add(&session_id, "draft");

        let editing = screen_start_edit(session_id.clone(), note_id.clone());
        let editing = editing.snapshot.expect("edit snapshot");
        assert_eq!(editing.commit_icon, "checkmark");
        assert_eq!(editing.overlay.expect("overlay visible").text, "draft");

        screen_set_input(session_id.clone(), "final".to_string());
        let saved = screen_submit(session_id.clone());
        assert_eq!(saved.message, "Note saved.");
        let saved = saved.snapshot.expect("save snapshot");
        assert!(saved.overlay.is_none());
        assert_eq!(saved.input_text, "");
        assert_eq!(saved.rows[0].text, "final");
    }

    #[test]
    fn cancel_and_delete_flow() {
        let session_id = open();
        let note_id = add(&session_id, "temp");

        screen_start_edit(session_id.clone(), note_id.clone());
        let cancelled = screen_cancel_edit(session_id.clone());
        assert_eq!(cancelled.message, "Edit cancelled.");
        assert_eq!(
            cancelled.snapshot.expect("cancel snapshot").rows[0].text,
            "temp"
        );

        let deleted = screen_delete(session_id.clone(), note_id);
        assert_eq!(deleted.message, "Note deleted.");
        assert!(deleted.snapshot.expect("delete snapshot").rows.is_empty());
    }

    #[test]
    fn save_edit_and_unknown_note_ids_are_no_ops() {
        let session_id = open();
        let closed_save = screen_save_edit(session_id.clone());
        assert!(closed_save.ok);
        assert_eq!(closed_save.message, "No change.");

        let note_id = add(&session_id, "draft");
        let missing = "11111111-2222-4333-8444-555555555555".to_string();
        let ignored = screen_start_edit(session_id.clone(), missing.clone());
        assert!(ignored.ok);
        assert!(ignored.snapshot.expect("snapshot").overlay.is_none());
        assert_eq!(screen_delete(session_id.clone(), missing).message, "No change.");

        screen_start_edit(session_id.clone(), note_id);
        screen_set_input(session_id.clone(), "saved text".to_string());
        let saved = screen_save_edit(session_id.clone());
        assert_eq!(saved.message, "Note saved.");
        assert_eq!(saved.snapshot.expect("snapshot").rows[0].text, "saved text");
    }

    #[test]
    fn malformed_note_id_is_reported() {
        let session_id = open();
        let response = screen_delete(session_id, "not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid note id"));
    }

    #[test]
    fn closed_session_is_unknown() {
        let session_id = open();
        assert!(screen_close(session_id.clone()).ok);

        let response = screen_snapshot(session_id.clone());
        assert!(!response.ok);
        assert!(response.message.contains("unknown screen session"));
        assert!(!screen_close(session_id).ok);
    }

    #[test]
    fn sessions_are_isolated() {
        let first = open();
        let second = open();
        add(&first, "only in first");

        assert_eq!(snapshot(&first).rows.len(), 1);
        assert!(snapshot(&second).rows.is_empty());
    }
}
