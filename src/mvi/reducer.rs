//! Reducer trait.

use std::sync::Arc;

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms a slice based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State. Intents it does
/// not recognise return the same `Arc`, so callers can detect "unchanged"
/// with `Arc::ptr_eq`.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Arc<Self::State>, intent: &Self::Intent) -> Arc<Self::State>;
}
