//! Edition state: stories, reading progress, saved list and reader settings.

pub mod intent;
pub mod reducer;
pub mod settings;
pub mod state;
pub mod story;
pub mod view;

pub use intent::EditionIntent;
pub use reducer::EditionReducer;
pub use settings::{
    ClarityFlag, ClarityPatch, ClaritySettings, EditionPatch, EditionSettings, FontSize,
    ScheduleFlag,
};
pub use state::{AppState, EditionProgress};
pub use story::{seed_stories, Story, StoryId};
