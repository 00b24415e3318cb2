use serde::Serialize;

use crate::actions::ActionRequest;
use crate::state::RootState;
use crate::views::{Container, ViewContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfileViewModel {
    Loaded {
        name: String,
        email: String,
        admin: bool,
    },
    Empty {
        message: String,
    },
}

/// The signed-in user's profile page.
pub struct ProfileView;

impl Container for ProfileView {
    type Props = ();
    type ViewModel = ProfileViewModel;

    fn on_mount(_: &()) -> Vec<ActionRequest> {
        vec![ActionRequest::FetchUserProfile]
    }

    fn render(state: &RootState, _: &(), _: &ViewContext) -> ProfileViewModel {
        match state.user.profile.as_ref() {
            Some(profile) => ProfileViewModel::Loaded {
                name: profile.full_name(),
                email: profile.email.clone(),
                admin: false,
            },
            None => ProfileViewModel::Empty {
                message: "nothing yet".to_string(),
            },
        }
    }
}
