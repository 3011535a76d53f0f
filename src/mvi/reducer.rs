use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// Implementations must be total and side-effect free: every intent the type
/// accepts produces a state, and intents that do not apply return the input.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
