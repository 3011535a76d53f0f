use serde::{Deserialize, Serialize};

use crate::edition::settings::{ClaritySettings, EditionSettings};
use crate::edition::story::{seed_stories, Story, StoryId};
use crate::mvi::UiState;

/// Where the reader is in the current edition.
///
/// The cursor indexes `AppState::stories`; `cursor == stories.len()` means
/// past the end. `Completed` keeps the cursor so a finished edition still
/// reports how far the reader got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EditionProgress {
    #[default]
    NotStarted,
    InProgress {
        cursor: usize,
    },
    Completed {
        cursor: usize,
    },
}

impl EditionProgress {
    pub fn cursor(&self) -> usize {
        match self {
            Self::NotStarted => 0,
            Self::InProgress { cursor } | Self::Completed { cursor } => *cursor,
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Aggregate root for one reading session.
///
/// `saved_stories` is a copy-out list: entries are detached from `stories`
/// and outlive a mute of their source story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub stories: Vec<Story>,
    pub progress: EditionProgress,
    pub saved_stories: Vec<Story>,
    pub clarity_settings: ClaritySettings,
    pub edition_settings: EditionSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_stories(seed_stories())
    }
}

impl UiState for AppState {}

impl AppState {
    /// Fresh, not-started edition over `stories` with default settings.
    pub fn with_stories(stories: Vec<Story>) -> Self {
        Self {
            stories,
            progress: EditionProgress::NotStarted,
            saved_stories: Vec::new(),
            clarity_settings: ClaritySettings::default(),
            edition_settings: EditionSettings::default(),
        }
    }

    pub fn current_story_index(&self) -> usize {
        self.progress.cursor()
    }

    pub fn edition_started(&self) -> bool {
        self.progress.is_started()
    }

    pub fn edition_completed(&self) -> bool {
        self.progress.is_completed()
    }

    pub fn story(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| &s.id == id)
    }

    pub fn saved(&self, id: &StoryId) -> Option<&Story> {
        self.saved_stories.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StoryId) -> bool {
        self.story(id).is_some()
    }

    /// Mark the story under the cursor read and move past it.
    ///
    /// Both happen in one step; a cursor already at or past the end only
    /// completes the edition.
    pub(crate) fn advance(&mut self) {
        let cursor = self.progress.cursor();
        let Some(story) = self.stories.get_mut(cursor) else {
            self.progress = EditionProgress::Completed { cursor };
            return;
        };
        story.is_read = true;

        let next = cursor + 1;
        self.progress = if next >= self.stories.len() {
            EditionProgress::Completed { cursor: next }
        } else {
            EditionProgress::InProgress { cursor: next }
        };
    }

    pub(crate) fn complete(&mut self) {
        self.progress = EditionProgress::Completed {
            cursor: self.progress.cursor(),
        };
    }

    pub(crate) fn reset(&mut self) {
        self.progress = EditionProgress::NotStarted;
        for story in &mut self.stories {
            story.is_read = false;
        }
    }

    /// Flip the saved flag and keep the saved list in step.
    ///
    /// Returns `false` (and changes nothing) when `id` is not in `stories`.
    pub(crate) fn toggle_save(&mut self, id: &StoryId) -> bool {
        let Some(story) = self.stories.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        let was_saved = story.is_saved;
        story.is_saved = !was_saved;

        if was_saved {
            self.saved_stories.retain(|s| &s.id != id);
        } else {
            let copy = story.saved_copy();
            self.saved_stories.push(copy);
        }
        true
    }

    /// Drop a story from the edition. The cursor is left where it was.
    pub(crate) fn mute(&mut self, id: &StoryId) -> bool {
        let before = self.stories.len();
        self.stories.retain(|s| &s.id != id);
        self.stories.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn default_state_is_not_started_over_seed() {
        let state = AppState::default();
        assert_eq!(state.stories.len(), 6);
        assert_eq!(state.current_story_index(), 0);
        assert!(!state.edition_started());
        assert!(!state.edition_completed());
        assert!(state.saved_stories.is_empty());
    }

    #[test]
    fn advance_past_last_story_completes() {
        let mut state = AppState::with_stories(seed_stories().into_iter().take(2).collect());
        state.advance();
        assert_eq!(state.progress, EditionProgress::InProgress { cursor: 1 });
        state.advance();
        assert_eq!(state.progress, EditionProgress::Completed { cursor: 2 });
        assert!(state.stories.iter().all(|s| s.is_read));
    }

    #[test]
    fn advance_at_end_keeps_cursor_in_range() {
        let mut state = AppState::with_stories(seed_stories().into_iter().take(1).collect());
        state.advance();
        state.advance();
        assert_eq!(state.progress, EditionProgress::Completed { cursor: 1 });
    }

    #[test]
    fn advance_on_empty_edition_completes_at_zero() {
        let mut state = AppState::with_stories(Vec::new());
        state.advance();
        assert_eq!(state.progress, EditionProgress::Completed { cursor: 0 });
    }

    #[test]
    fn toggle_save_unknown_id_reports_false() {
        let mut state = AppState::default();
        let before = state.clone();
        assert!(!state.toggle_save(&StoryId::new("nope")));
        assert_eq!(state, before);
    }

    #[test]
    fn unsave_removes_saved_copy() {
        let mut state = AppState::default();
        let id = StoryId::new("3");
        state.toggle_save(&id);
        assert_eq!(ids(&state.saved_stories), vec!["3"]);
        state.toggle_save(&id);
        assert!(state.saved_stories.is_empty());
        assert!(!state.story(&id).map(|s| s.is_saved).unwrap_or(true));
    }

    #[test]
    fn mute_keeps_cursor() {
        let mut state = AppState::default();
        state.progress = EditionProgress::InProgress { cursor: 2 };
        assert!(state.mute(&StoryId::new("1")));
        assert_eq!(state.current_story_index(), 2);
        assert_eq!(ids(&state.stories), vec!["2", "3", "4", "5", "6"]);
        assert!(!state.mute(&StoryId::new("1")));
    }

    #[test]
    fn progress_serializes_with_status_tag() {
        let json = serde_json::to_value(EditionProgress::InProgress { cursor: 3 }).unwrap();
        assert_eq!(json["status"], "inProgress");
        assert_eq!(json["cursor"], 3);
    }
}
