//! Container views.
//!
//! A container names the requests it needs on mount and renders a view
//! model synchronously from the current state tree.

mod dataset_card;
mod file;
mod mount;
mod profile;

pub use dataset_card::{format_created, DatasetCard, DatasetCardProps, DatasetCardView};
pub use file::{FileView, FileViewModel, PreviewerConfiguration};
pub use mount::MountGuard;
pub use profile::{ProfileView, ProfileViewModel};

use crate::actions::{ActionRequest, Dispatcher};
use crate::config::{ApiConfig, Config, CredentialStatus};
use crate::state::RootState;

/// Settings views need to build links.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    pub hostname: String,
    pub api_prefix: String,
    /// Passed to previewers so they can fetch preview content.
    pub api_key: Option<String>,
}

impl ViewContext {
    pub fn from_config(config: &Config) -> Self {
        let api_key = match config.auth.resolve_credential() {
            CredentialStatus::Configured(key) => Some(key.expose().to_string()),
            _ => None,
        };
        Self {
            hostname: config.api.base_url().to_string(),
            api_prefix: config.api.api_prefix.clone(),
            api_key,
        }
    }

    /// Absolute URL of a versioned API path.
    pub fn v2_url(&self, path: &str) -> String {
        ApiConfig {
            hostname: self.hostname.clone(),
            api_prefix: self.api_prefix.clone(),
            ..ApiConfig::default()
        }
        .v2_url(path)
    }
}

/// A view that fetches on mount and renders from state.
pub trait Container {
    type Props;
    type ViewModel;

    /// Requests to trigger when the view mounts.
    fn on_mount(props: &Self::Props) -> Vec<ActionRequest>;

    /// Render from the current state. Must not block or perform I/O.
    fn render(state: &RootState, props: &Self::Props, ctx: &ViewContext) -> Self::ViewModel;
}

/// Mount container `C`: trigger its requests and return the guard.
pub fn mount<C: Container>(dispatcher: Dispatcher, props: &C::Props) -> MountGuard {
    MountGuard::mount(dispatcher, C::on_mount(props))
}
