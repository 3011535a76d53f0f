//! Shared test helpers.

#![allow(dead_code)]

use std::path::PathBuf;

use claritynews::edition::{AppState, EditionIntent, EditionReducer, Story, StoryId};
use claritynews::mvi::Reducer;
use tempfile::TempDir;

/// Apply intents in order with the pure reducer.
pub fn reduce_all(state: AppState, intents: impl IntoIterator<Item = EditionIntent>) -> AppState {
    intents.into_iter().fold(state, EditionReducer::reduce)
}

pub fn story(id: &str) -> Story {
    Story {
        id: StoryId::new(id),
        headline: format!("Headline {id}"),
        summary: format!("Summary {id}"),
        why_matters: "Because".to_string(),
        whats_new: "Something".to_string(),
        source: format!("Source {id}"),
        timestamp: "1h ago".to_string(),
        read_time: "30s".to_string(),
        is_read: false,
        is_saved: false,
    }
}

/// Fresh state over stories with the given ids.
pub fn state_with(ids: &[&str]) -> AppState {
    AppState::with_stories(ids.iter().map(|id| story(id)).collect())
}

pub fn ids(stories: &[Story]) -> Vec<String> {
    stories.iter().map(|s| s.id.to_string()).collect()
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
