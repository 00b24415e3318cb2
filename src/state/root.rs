use std::sync::Arc;

use crate::mvi::Reducer;
use crate::state::action::Action;
use crate::state::dataset::{DatasetReducer, DatasetState};
use crate::state::error::{ErrorReducer, ErrorState};
use crate::state::file::{FileReducer, FileState};
use crate::state::metadata::{MetadataReducer, MetadataState};
use crate::state::user::{UserReducer, UserState};

/// The whole client-side cache, one `Arc` per slice.
///
/// Cloning is cheap; slices an action does not touch keep their pointer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub file: Arc<FileState>,
    pub dataset: Arc<DatasetState>,
    pub metadata: Arc<MetadataState>,
    pub user: Arc<UserState>,
    pub error: Arc<ErrorState>,
}

impl RootState {
    /// Run every slice reducer over `action`.
    pub fn reduce(self, action: &Action) -> Self {
        Self {
            file: FileReducer::reduce(self.file, action),
            dataset: DatasetReducer::reduce(self.dataset, action),
            metadata: MetadataReducer::reduce(self.metadata, action),
            user: UserReducer::reduce(self.user, action),
            error: ErrorReducer::reduce(self.error, action),
        }
    }

    /// True when every slice is the same allocation as in `other`.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.file, &other.file)
            && Arc::ptr_eq(&self.dataset, &other.dataset)
            && Arc::ptr_eq(&self.metadata, &other.metadata)
            && Arc::ptr_eq(&self.user, &other.user)
            && Arc::ptr_eq(&self.error, &other.error)
    }
}
