//! Line-oriented command grammar for driving a store from a terminal or a
//! script.
//!
//! ```text
//! start | next | complete | reset | advance
//! save <id> | mute <id> | open <id>
//! clarity highContrast=true,calm_mode=false
//! schedule morning=false
//! font large
//! ```

use thiserror::Error;

use crate::controller;
use crate::edition::{
    AppState, ClarityFlag, ClarityPatch, EditionIntent, EditionPatch, FontSize, ScheduleFlag,
    StoryId,
};
use crate::store::EditionStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("'{verb}' needs a story id")]
    MissingId { verb: String },

    #[error("'{verb}' needs at least one key=value pair")]
    MissingSettings { verb: String },

    #[error("Unknown setting '{key}' for '{verb}'")]
    UnknownSetting { verb: String, key: String },

    #[error("Invalid value '{value}' for '{key}' (expected true or false)")]
    InvalidBool { key: String, value: String },

    #[error("Invalid font size '{value}' (expected small, medium or large)")]
    InvalidFontSize { value: String },
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sent to the store as is.
    Intent(EditionIntent),
    /// Next button: next story, or complete on the last one.
    Advance,
    /// Mute and move on while reading.
    Mute(StoryId),
    /// Open the original article and move on.
    Open(StoryId),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        if verb.is_empty() {
            return Err(CommandError::Empty);
        }

        let command = match verb.to_ascii_lowercase().as_str() {
            "start" => Self::Intent(EditionIntent::StartEdition),
            "next" => Self::Intent(EditionIntent::NextStory),
            "complete" | "finish" => Self::Intent(EditionIntent::CompleteEdition),
            "reset" => Self::Intent(EditionIntent::ResetEdition),
            "advance" => Self::Advance,
            "save" => Self::Intent(EditionIntent::ToggleSave {
                story_id: require_id(verb, rest)?,
            }),
            "mute" => Self::Mute(require_id(verb, rest)?),
            "open" => Self::Open(require_id(verb, rest)?),
            "clarity" => Self::Intent(EditionIntent::UpdateClaritySettings {
                settings: parse_clarity(verb, rest)?,
            }),
            "schedule" => Self::Intent(EditionIntent::UpdateEditionSettings {
                settings: parse_schedule(verb, rest)?,
            }),
            "font" => Self::Intent(EditionIntent::UpdateClaritySettings {
                settings: ClarityPatch::font_size(parse_font_size(rest)?),
            }),
            _ => Self::Intent(EditionIntent::Unknown),
        };
        Ok(command)
    }

    pub fn run(self, store: &EditionStore) -> AppState {
        match self {
            Self::Intent(intent) => store.dispatch(intent),
            Self::Advance => controller::advance(store),
            Self::Mute(id) => controller::mute(store, id),
            Self::Open(id) => controller::read_original(store, id),
        }
    }
}

fn require_id(verb: &str, rest: &str) -> Result<StoryId, CommandError> {
    match rest.split_whitespace().next() {
        Some(id) => Ok(StoryId::new(id)),
        None => Err(CommandError::MissingId {
            verb: verb.to_string(),
        }),
    }
}

fn pairs<'a>(verb: &str, rest: &'a str) -> Result<Vec<(&'a str, &'a str)>, CommandError> {
    let pairs: Vec<(&str, &str)> = rest
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| match p.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (p, "true"),
        })
        .collect();
    if pairs.is_empty() {
        return Err(CommandError::MissingSettings {
            verb: verb.to_string(),
        });
    }
    Ok(pairs)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_font_size(value: &str) -> Result<FontSize, CommandError> {
    FontSize::parse(value).ok_or_else(|| CommandError::InvalidFontSize {
        value: value.to_string(),
    })
}

fn parse_clarity(verb: &str, rest: &str) -> Result<ClarityPatch, CommandError> {
    let mut patch = ClarityPatch::default();
    for (key, value) in pairs(verb, rest)? {
        if matches!(key, "fontSize" | "font_size") {
            patch.font_size = Some(parse_font_size(value)?);
            continue;
        }
        let flag = ClarityFlag::parse(key).ok_or_else(|| CommandError::UnknownSetting {
            verb: verb.to_string(),
            key: key.to_string(),
        })?;
        patch.set(flag, parse_bool(key, value)?);
    }
    Ok(patch)
}

fn parse_schedule(verb: &str, rest: &str) -> Result<EditionPatch, CommandError> {
    let mut patch = EditionPatch::default();
    for (key, value) in pairs(verb, rest)? {
        let flag = ScheduleFlag::parse(key).ok_or_else(|| CommandError::UnknownSetting {
            verb: verb.to_string(),
            key: key.to_string(),
        })?;
        patch.set(flag, parse_bool(key, value)?);
    }
    Ok(patch)
}
