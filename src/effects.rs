//! Side effects observed on state transitions.
//!
//! The reducer never performs I/O. After each dispatch the store compares the
//! previous and next snapshots, derives the [`Effect`]s a collaborator might
//! care about (text-to-speech, notification scheduling, analytics), and hands
//! them to every registered [`EffectSink`]. Sinks cannot fail the transition.

use parking_lot::Mutex;

use crate::edition::{AppState, EditionSettings, StoryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `claritySettings.readAloud` flipped; a speech engine should start or stop.
    ReadAloudChanged { enabled: bool },
    /// The notification schedule changed.
    ScheduleChanged { settings: EditionSettings },
    /// The edition entered the completed state.
    EditionFinished { read: usize, total: usize },
    StorySaved { id: StoryId },
    StoryUnsaved { id: StoryId },
    StoryMuted { id: StoryId },
    /// A reader asked for the original article. Issued by the controller only.
    OpenOriginal { id: StoryId, source: String },
}

pub trait EffectSink: Send + Sync {
    fn handle(&self, effect: &Effect);
}

/// Effects implied by moving from `prev` to `next`.
pub fn diff(prev: &AppState, next: &AppState) -> Vec<Effect> {
    let mut effects = Vec::new();

    for story in &next.stories {
        let before = prev.story(&story.id).map(|s| s.is_saved);
        match (before, story.is_saved) {
            (Some(false), true) => effects.push(Effect::StorySaved {
                id: story.id.clone(),
            }),
            (Some(true), false) => effects.push(Effect::StoryUnsaved {
                id: story.id.clone(),
            }),
            _ => {}
        }
    }

    for story in &prev.stories {
        if !next.contains(&story.id) {
            effects.push(Effect::StoryMuted {
                id: story.id.clone(),
            });
        }
    }

    if prev.clarity_settings.read_aloud != next.clarity_settings.read_aloud {
        effects.push(Effect::ReadAloudChanged {
            enabled: next.clarity_settings.read_aloud,
        });
    }

    if prev.edition_settings != next.edition_settings {
        effects.push(Effect::ScheduleChanged {
            settings: next.edition_settings,
        });
    }

    if !prev.edition_completed() && next.edition_completed() {
        effects.push(Effect::EditionFinished {
            read: next.stories.iter().filter(|s| s.is_read).count(),
            total: next.stories.len(),
        });
    }

    effects
}

/// Stand-in for the real collaborators: writes each effect to the log.
#[derive(Debug, Default)]
pub struct LoggingEffectSink;

impl EffectSink for LoggingEffectSink {
    fn handle(&self, effect: &Effect) {
        match effect {
            Effect::ReadAloudChanged { enabled } => {
                tracing::info!(enabled, "Read aloud toggled (no speech engine attached)");
            }
            Effect::ScheduleChanged { settings } => {
                tracing::info!(
                    morning = settings.morning_edition,
                    midday = settings.midday_edition,
                    evening = settings.evening_edition,
                    critical = settings.critical_updates,
                    "Edition schedule changed (no scheduler attached)"
                );
            }
            Effect::EditionFinished { read, total } => {
                tracing::info!(read, total, "Edition finished");
            }
            Effect::StorySaved { id } => tracing::info!(story = %id, "Story saved"),
            Effect::StoryUnsaved { id } => tracing::info!(story = %id, "Story removed from saved"),
            Effect::StoryMuted { id } => tracing::info!(story = %id, "Topic muted"),
            Effect::OpenOriginal { id, source } => {
                tracing::info!(story = %id, source = %source, "Would open the original article");
            }
        }
    }
}

/// Keeps every effect it sees, in order.
#[derive(Debug, Default)]
pub struct RecordingEffectSink {
    effects: Mutex<Vec<Effect>>,
}

impl RecordingEffectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.lock().clone()
    }
}

impl EffectSink for RecordingEffectSink {
    fn handle(&self, effect: &Effect) {
        self.effects.lock().push(effect.clone());
    }
}
