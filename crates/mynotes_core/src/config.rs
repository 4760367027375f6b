//! Screen configuration and environment overrides.
//!
//! # Responsibility
//! - Collect the tunables of one notes screen in a single value.
//! - Resolve overrides from `MYNOTES_*` environment variables.
//!
//! # Invariants
//! - Missing or blank variables fall back to defaults.
//! - Malformed values are reported, never silently replaced.

use crate::logging::{default_log_level, normalize_level};
use crate::model::note::MAX_NOTE_CHARS;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_MAX_NOTE_CHARS: &str = "MYNOTES_MAX_NOTE_CHARS";
pub const ENV_EDIT_VALIDATION: &str = "MYNOTES_EDIT_VALIDATION";
pub const ENV_LOG_LEVEL: &str = "MYNOTES_LOG_LEVEL";

/// Rule applied when an edit is saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditValidation {
    /// Save trims and writes whatever the composer holds.
    #[default]
    Unchecked,
    /// Save applies the creation rules; a rejected save keeps the overlay open.
    Enforced,
}

impl EditValidation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Enforced => "enforced",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Some(Self::Unchecked),
            "enforced" => Some(Self::Enforced),
            _ => None,
        }
    }
}

/// Tunables for one `NotesScreen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Creation length bound in UTF-16 code units.
    pub max_note_chars: usize,
    pub edit_validation: EditValidation,
    /// Normalized level used when a host initializes logging.
    pub log_level: &'static str,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            max_note_chars: MAX_NOTE_CHARS,
            edit_validation: EditValidation::default(),
            log_level: default_log_level(),
        }
    }
}

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMaxNoteChars(String),
    InvalidEditValidation(String),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMaxNoteChars(value) => write!(
                f,
                "{ENV_MAX_NOTE_CHARS} must be a positive integer, got `{value}`"
            ),
            Self::InvalidEditValidation(value) => write!(
                f,
                "{ENV_EDIT_VALIDATION} must be unchecked|enforced, got `{value}`"
            ),
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL} must be trace|debug|info|warn|error, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

impl ScreenConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    ///
    /// # Errors
    /// - Returns the first malformed value encountered.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(raw) = read(ENV_MAX_NOTE_CHARS) {
            config.max_note_chars = raw
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidMaxNoteChars(raw))?;
        }
        if let Some(raw) = read(ENV_EDIT_VALIDATION) {
            config.edit_validation =
                EditValidation::parse(&raw).ok_or(ConfigError::InvalidEditValidation(raw))?;
        }
        if let Some(raw) = read(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&raw).map_err(|_| ConfigError::InvalidLogLevel(raw))?;
        }

        Ok(config)
    }
}
