use super::intent::Intent;
use super::state::ViewState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// `(State, Intent) -> State`, with no I/O and no logging.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
