//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are key presses translated into domain actions, or deferred
/// timer completions. Reducers consume them to produce new states.
pub trait Intent: Send + 'static {}
