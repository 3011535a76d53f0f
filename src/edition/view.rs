//! Read-side projections over an [`AppState`] snapshot.
//!
//! Screens call these instead of poking at the state layout; none of them
//! mutate anything.

use crate::edition::state::{AppState, EditionProgress};
use crate::edition::story::Story;

/// What the edition tab should show for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Nothing started yet, or the cursor drifted past the end after a mute.
    Welcome,
    Reading { story: &'a Story, position: usize },
    Finished,
}

pub fn screen(state: &AppState) -> Screen<'_> {
    if state.edition_completed() {
        return Screen::Finished;
    }
    match current_story(state) {
        Some(story) => Screen::Reading {
            story,
            position: state.current_story_index(),
        },
        None => Screen::Welcome,
    }
}

/// The story under the cursor while an edition is in progress.
pub fn current_story(state: &AppState) -> Option<&Story> {
    match state.progress {
        EditionProgress::InProgress { cursor } => state.stories.get(cursor),
        _ => None,
    }
}

pub fn read_count(state: &AppState) -> usize {
    state.stories.iter().filter(|s| s.is_read).count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressView {
    /// 1-based position shown as "Story n of total"; 0 before starting.
    pub position: usize,
    pub total: usize,
    /// Share of the edition already read, in `0.0..=1.0`.
    pub fraction: f32,
}

pub fn progress(state: &AppState) -> ProgressView {
    let total = state.stories.len();
    let position = match state.progress {
        EditionProgress::NotStarted => 0,
        EditionProgress::InProgress { cursor } => (cursor + 1).min(total),
        EditionProgress::Completed { cursor } => cursor.min(total),
    };
    let fraction = if total == 0 {
        0.0
    } else {
        read_count(state) as f32 / total as f32
    };
    ProgressView {
        position,
        total,
        fraction,
    }
}

/// Heading for the edition tab, by local hour of day.
pub fn edition_title(hour: u32) -> &'static str {
    if hour < 12 {
        "Your Morning Edition"
    } else if hour < 17 {
        "Your Midday Edition"
    } else {
        "Your Evening Edition"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploreFilter {
    #[default]
    Latest,
    Saved,
    LocalFirst,
}

impl ExploreFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Saved => "Saved",
            Self::LocalFirst => "Local-first",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Some(Self::Latest),
            "saved" => Some(Self::Saved),
            "local-first" | "local_first" | "local" => Some(Self::LocalFirst),
            _ => None,
        }
    }
}

/// Stories listed on the explore tab, in edition order.
///
/// Stories carry no locality yet, so `LocalFirst` lists everything.
pub fn explore(state: &AppState, filter: ExploreFilter) -> Vec<&Story> {
    state
        .stories
        .iter()
        .filter(|s| match filter {
            ExploreFilter::Saved => s.is_saved,
            ExploreFilter::Latest | ExploreFilter::LocalFirst => true,
        })
        .collect()
}
