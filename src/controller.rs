//! Screen-level flows built on top of [`EditionStore::dispatch`].
//!
//! These mirror what the reading screens do with a tap: each one picks the
//! intents to send based on the snapshot it sees.

use crate::edition::{
    AppState, ClarityFlag, ClarityPatch, EditionIntent, EditionPatch, FontSize, ScheduleFlag,
    StoryId,
};
use crate::effects::Effect;
use crate::store::EditionStore;

/// The intent the "next" button sends for this snapshot.
///
/// On the last story the edition is completed directly, so that story is
/// not marked read.
pub fn advance_intent(state: &AppState) -> EditionIntent {
    if state.current_story_index() + 1 < state.stories.len() {
        EditionIntent::NextStory
    } else {
        EditionIntent::CompleteEdition
    }
}

pub fn advance(store: &EditionStore) -> AppState {
    let intent = store.with_state(advance_intent);
    store.dispatch(intent)
}

/// Mute a topic; while an edition is running, also move on.
///
/// The follow-up is chosen from the snapshot the reader tapped on, before the
/// story left the list.
pub fn mute(store: &EditionStore, id: StoryId) -> AppState {
    let follow_up = store.with_state(|state| {
        state
            .edition_started()
            .then(|| advance_intent(state))
    });
    let state = store.dispatch(EditionIntent::MuteTopic { story_id: id });
    match follow_up {
        Some(intent) => store.dispatch(intent),
        None => state,
    }
}

/// Hand the original article to whoever opens links, then move on.
///
/// Unknown ids do nothing.
pub fn read_original(store: &EditionStore, id: StoryId) -> AppState {
    let source = store.with_state(|state| state.story(&id).map(|s| s.source.clone()));
    let Some(source) = source else {
        tracing::debug!(story = %id, "Read original for unknown story");
        return store.snapshot();
    };
    store.emit(&[Effect::OpenOriginal { id, source }]);
    advance(store)
}

pub fn toggle_clarity(store: &EditionStore, flag: ClarityFlag) -> AppState {
    let value = store.with_state(|state| !state.clarity_settings.get(flag));
    store.dispatch(EditionIntent::UpdateClaritySettings {
        settings: ClarityPatch::flag(flag, value),
    })
}

pub fn toggle_schedule(store: &EditionStore, flag: ScheduleFlag) -> AppState {
    let value = store.with_state(|state| !state.edition_settings.get(flag));
    store.dispatch(EditionIntent::UpdateEditionSettings {
        settings: EditionPatch::flag(flag, value),
    })
}

pub fn set_font_size(store: &EditionStore, size: FontSize) -> AppState {
    store.dispatch(EditionIntent::UpdateClaritySettings {
        settings: ClarityPatch::font_size(size),
    })
}
