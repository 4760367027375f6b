//! Line command parsing and plain-text rendering.

use mynotes_core::{ListView, NotesScreen, ScreenEvent, ScreenOutcome, ScreenView};
use std::fmt::Write;

pub const HELP: &str = "commands: type <text> | submit | add <text> | edit <n> | save | cancel | rm <n> | show | help | quit";

/// One parsed input line. Row numbers are 1-based display positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Submit,
    Add(String),
    Edit(usize),
    Save,
    Cancel,
    Remove(usize),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    match verb {
        "type" => Ok(Command::Type(rest.to_string())),
        "submit" => Ok(Command::Submit),
        "add" => Ok(Command::Add(rest.to_string())),
        "edit" => parse_row(rest).map(Command::Edit),
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "rm" | "delete" => parse_row(rest).map(Command::Remove),
        "show" | "" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn parse_row(raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    raw.parse::<usize>()
        .ok()
        .filter(|row| *row > 0)
        .ok_or_else(|| format!("expected a row number, got `{raw}`"))
}

/// Runs one command against the screen and describes the result.
///
/// # Errors
/// - Row number does not match a visible row.
/// - `add` while the edit overlay is open.
pub fn apply(screen: &mut NotesScreen, command: Command) -> Result<String, String> {
    let outcome = match command {
        Command::Type(text) => screen.handle(ScreenEvent::InputChanged(text)),
        Command::Submit => screen.handle(ScreenEvent::Submit),
        Command::Add(_) if screen.overlay().is_visible() => {
            return Err("finish or cancel the edit first".to_string());
        }
        Command::Add(text) => {
            screen.handle(ScreenEvent::InputChanged(text));
            screen.handle(ScreenEvent::Submit)
        }
        Command::Edit(row) => {
            let id = row_id(screen, row)?;
            screen.handle(ScreenEvent::StartEdit(id))
        }
        Command::Save => screen.handle(ScreenEvent::SaveEdit),
        Command::Cancel => screen.handle(ScreenEvent::CancelEdit),
        Command::Remove(row) => {
            let id = row_id(screen, row)?;
            screen.handle(ScreenEvent::Delete(id))
        }
        Command::Show => return Ok("ok".to_string()),
        Command::Help | Command::Quit => return Ok(String::new()),
    };

    Ok(describe(&outcome))
}

fn row_id(screen: &NotesScreen, row: usize) -> Result<mynotes_core::NoteId, String> {
    screen
        .store()
        .notes()
        .get(row.wrapping_sub(1))
        .map(|note| note.id)
        .ok_or_else(|| format!("no row {row}"))
}

fn describe(outcome: &ScreenOutcome) -> String {
    match outcome {
        ScreenOutcome::InputChanged => "input updated".to_string(),
        ScreenOutcome::Added(_) => "note added".to_string(),
        ScreenOutcome::Rejected(_) => "input ignored".to_string(),
        ScreenOutcome::EditStarted(_) => "editing".to_string(),
        ScreenOutcome::Saved { .. } => "saved".to_string(),
        ScreenOutcome::EditCancelled => "edit cancelled".to_string(),
        ScreenOutcome::Deleted(_) => "note deleted".to_string(),
        ScreenOutcome::Ignored => "no change".to_string(),
    }
}

/// Renders the view as plain text.
pub fn render(view: &ScreenView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.header.title);
    let _ = writeln!(out, "   {}", view.header.subtitle);

    match &view.list {
        ListView::Empty { message } => {
            let _ = writeln!(out, "   {message}");
        }
        ListView::Rows(rows) => {
            for (index, row) in rows.iter().enumerate() {
                let _ = writeln!(out, "{:>3}. {}", index + 1, row.text);
            }
        }
    }

    match &view.overlay {
        Some(overlay) => {
            let _ = writeln!(out, "[{}] {}", overlay.title, overlay.text);
            let _ = writeln!(out, "    ({} | {})", overlay.cancel_label, overlay.save_label);
        }
        None if view.input_bar.text.is_empty() => {
            let _ = writeln!(
                out,
                "[{}] ({})",
                view.input_bar.placeholder,
                view.input_bar.commit_icon.icon()
            );
        }
        None => {
            let _ = writeln!(
                out,
                "[{}] ({})",
                view.input_bar.text,
                view.input_bar.commit_icon.icon()
            );
        }
    }

    out
}
