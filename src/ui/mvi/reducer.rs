use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The only place where transitions happen. Ids, timestamps and anything
/// else non-deterministic arrive inside the intent, so `reduce` stays pure.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
