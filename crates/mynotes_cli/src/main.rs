//! Terminal driver for one notes screen.
//!
//! # Responsibility
//! - Run a single in-memory screen session fed by stdin line commands.
//! - Double as a linkage probe for `mynotes_core` (`--probe`).

mod repl;

use clap::Parser;
use mynotes_core::{init_logging, NotesScreen, ScreenConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "mynotes", version, about = "In-memory notes screen in the terminal")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults to MYNOTES_LOG_LEVEL
    /// or the build-mode default. Only meaningful with --log-dir.
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print core ping/version and exit.
    #[arg(long)]
    probe: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.probe {
        println!("mynotes_core ping={}", mynotes_core::ping());
        println!("mynotes_core version={}", mynotes_core::core_version());
        return ExitCode::SUCCESS;
    }

    let config = match ScreenConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("mynotes: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(config.log_level);
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("mynotes: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(NotesScreen::with_config(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mynotes: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut screen: NotesScreen) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}", repl::render(&screen.view()))?;
    writeln!(stdout, "{}", repl::HELP)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match repl::parse_command(&line) {
            Ok(repl::Command::Quit) => break,
            Ok(repl::Command::Help) => writeln!(stdout, "{}", repl::HELP)?,
            Ok(command) => match repl::apply(&mut screen, command) {
                Ok(message) => {
                    if let Some(id) = screen.take_entrance_cue() {
                        log::debug!("event=entrance_cue module=cli status=ok note_id={id}");
                    }
                    writeln!(stdout, "> {message}")?;
                    write!(stdout, "{}", repl::render(&screen.view()))?;
                }
                Err(err) => writeln!(stdout, "! {err}")?,
            },
            Err(err) => writeln!(stdout, "! {err}")?,
        }
        stdout.flush()?;
    }

    Ok(())
}
