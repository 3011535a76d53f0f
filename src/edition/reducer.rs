use crate::edition::intent::EditionIntent;
use crate::edition::state::{AppState, EditionProgress};
use crate::mvi::Reducer;

pub struct EditionReducer;

impl Reducer for EditionReducer {
    type State = AppState;
    type Intent = EditionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditionIntent::StartEdition => {
                state.progress = EditionProgress::InProgress { cursor: 0 };
            }
            EditionIntent::NextStory => state.advance(),
            EditionIntent::CompleteEdition => state.complete(),
            EditionIntent::ResetEdition => state.reset(),
            EditionIntent::ToggleSave { story_id } => {
                state.toggle_save(&story_id);
            }
            EditionIntent::MuteTopic { story_id } => {
                state.mute(&story_id);
            }
            EditionIntent::UpdateClaritySettings { settings } => {
                state.clarity_settings = state.clarity_settings.merge(&settings);
            }
            EditionIntent::UpdateEditionSettings { settings } => {
                state.edition_settings = state.edition_settings.merge(&settings);
            }
            EditionIntent::Unknown => {}
        }
        state
    }
}
