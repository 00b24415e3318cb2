//! Client-side state tree: actions, per-resource reducers and the store.

mod action;
mod dataset;
mod error;
mod file;
pub mod list;
mod metadata;
mod root;
mod store;
mod user;

pub use action::{Action, Event};
pub use dataset::{DatasetReducer, DatasetState};
pub use error::{ErrorReducer, ErrorState};
pub use file::{FileReducer, FileState};
pub use metadata::{MetadataReducer, MetadataState};
pub use root::RootState;
pub use store::Store;
pub use user::{UserReducer, UserState};
