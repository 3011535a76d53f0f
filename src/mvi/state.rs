/// Marker for snapshot types.
///
/// Snapshots are replaced wholesale on every transition, so they need to be
/// cheap to clone, comparable for change detection, and shareable across the
/// store handle.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
