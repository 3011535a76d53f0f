/// Marker for values a collaborator can dispatch into a store.
///
/// Intents carry only the minimal payload a transition needs (a story id,
/// a partial settings record). They are consumed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
