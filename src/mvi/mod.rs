//! Unidirectional data flow primitives.
//!
//! Every change to the edition goes through the same loop:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Collaborators (screens, effects)
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot read by collaborators
//! - **Intent**: something a reader did (tap next, save, flip a setting)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
