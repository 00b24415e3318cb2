use std::sync::Arc;

use serde::Serialize;

use crate::api::models::UserOut;
use crate::mvi::{Reducer, SliceState};
use crate::state::action::Action;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserState {
    /// `None` until the profile has been fetched.
    pub profile: Option<UserOut>,
}

impl SliceState for UserState {}

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Intent = Action;

    fn reduce(state: Arc<Self::State>, intent: &Self::Intent) -> Arc<Self::State> {
        match intent {
            Action::ReceiveUserProfile { profile } => Arc::new(UserState {
                profile: Some(profile.clone()),
            }),
            _ => state,
        }
    }
}
