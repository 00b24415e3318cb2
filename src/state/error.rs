use std::sync::Arc;

use serde::Serialize;

use crate::actions::ActionRequest;
use crate::mvi::{Reducer, SliceState};
use crate::state::action::Action;

/// Last failure reported by the shared error handler.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ErrorState {
    pub reason: Option<String>,
    pub status: Option<u16>,
    /// The request that failed, kept so it can be retried on demand.
    pub origin: Option<ActionRequest>,
}

impl ErrorState {
    pub fn has_failed(&self) -> bool {
        self.reason.is_some()
    }

    /// 401/403 from the server.
    pub fn is_not_authorized(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl SliceState for ErrorState {}

pub struct ErrorReducer;

impl Reducer for ErrorReducer {
    type State = ErrorState;
    type Intent = Action;

    fn reduce(state: Arc<Self::State>, intent: &Self::Intent) -> Arc<Self::State> {
        match intent {
            Action::Failed {
                reason,
                status,
                origin,
            } => Arc::new(ErrorState {
                reason: Some(reason.clone()),
                status: *status,
                origin: Some(origin.clone()),
            }),
            Action::ResetFailed if state.has_failed() => Arc::new(ErrorState::default()),
            _ => state,
        }
    }
}
