use serde::{Deserialize, Serialize};

use crate::edition::settings::{ClarityPatch, EditionPatch};
use crate::edition::story::StoryId;
use crate::mvi::Intent;

/// Every transition the edition store accepts.
///
/// On the wire this is tagged by `type` using the action names the mobile
/// screens dispatch. Any other tag decodes to [`EditionIntent::Unknown`],
/// which the reducer ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditionIntent {
    StartEdition,
    NextStory,
    CompleteEdition,
    ResetEdition,
    ToggleSave {
        #[serde(rename = "storyId")]
        story_id: StoryId,
    },
    MuteTopic {
        #[serde(rename = "storyId")]
        story_id: StoryId,
    },
    UpdateClaritySettings {
        settings: ClarityPatch,
    },
    UpdateEditionSettings {
        settings: EditionPatch,
    },
    #[serde(other)]
    Unknown,
}

impl Intent for EditionIntent {}

impl EditionIntent {
    pub fn toggle_save(id: impl Into<StoryId>) -> Self {
        Self::ToggleSave {
            story_id: id.into(),
        }
    }

    pub fn mute_topic(id: impl Into<StoryId>) -> Self {
        Self::MuteTopic {
            story_id: id.into(),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartEdition => "start_edition",
            Self::NextStory => "next_story",
            Self::CompleteEdition => "complete_edition",
            Self::ResetEdition => "reset_edition",
            Self::ToggleSave { .. } => "toggle_save",
            Self::MuteTopic { .. } => "mute_topic",
            Self::UpdateClaritySettings { .. } => "update_clarity_settings",
            Self::UpdateEditionSettings { .. } => "update_edition_settings",
            Self::Unknown => "unknown",
        }
    }
}
