/// Marker trait for state snapshots.
///
/// Clone to derive a new state, PartialEq to detect changes, Default for the
/// initial (or unmounted) value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
