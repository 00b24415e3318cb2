//! Shared error handler for every action creator.

use crate::actions::request::ActionRequest;
use crate::api::ApiError;
use crate::state::Action;

/// Turn a failed request into the single `FAILED` action.
///
/// The originating request travels with the action so a caller can retry
/// it explicitly; nothing is re-dispatched here.
pub fn handle_errors(error: ApiError, origin: ActionRequest) -> Action {
    tracing::warn!(
        creator = origin.label(),
        error_type = error.error_type(),
        status = error.status(),
        error = %error,
        "action creator failed"
    );

    Action::Failed {
        reason: error.reason(),
        status: error.status(),
        origin,
    }
}
