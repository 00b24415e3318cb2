use std::sync::Arc;

use serde::Serialize;

use crate::api::models::{DatasetOut, FileOut};
use crate::mvi::{Reducer, SliceState};
use crate::state::action::Action;
use crate::state::list::{append, remove_by_id, replace_by_id};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatasetState {
    /// Listing page of datasets.
    pub datasets: Vec<DatasetOut>,
    /// The dataset currently opened.
    pub about: DatasetOut,
    /// Files of the opened dataset.
    pub files: Vec<FileOut>,
    /// Last dataset created from this client.
    pub new_dataset: Option<DatasetOut>,
}

impl SliceState for DatasetState {}

pub struct DatasetReducer;

impl Reducer for DatasetReducer {
    type State = DatasetState;
    type Intent = Action;

    fn reduce(state: Arc<Self::State>, intent: &Self::Intent) -> Arc<Self::State> {
        match intent {
            Action::ReceiveDatasets { datasets } => Arc::new(DatasetState {
                datasets: datasets.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveDatasetAbout { about } | Action::UpdateDataset { about } => {
                Arc::new(DatasetState {
                    about: about.clone(),
                    ..(*state).clone()
                })
            }
            Action::CreateDataset { dataset } => Arc::new(DatasetState {
                new_dataset: Some(dataset.clone()),
                ..(*state).clone()
            }),
            Action::DeleteDataset { dataset } => Arc::new(DatasetState {
                datasets: remove_by_id(&state.datasets, &dataset.id),
                ..(*state).clone()
            }),
            Action::ReceiveFilesInDataset { files } => Arc::new(DatasetState {
                files: files.clone(),
                ..(*state).clone()
            }),
            Action::CreateFile { file } => Arc::new(DatasetState {
                files: append(&state.files, file),
                ..(*state).clone()
            }),
            Action::UpdateFile { file } => Arc::new(DatasetState {
                files: replace_by_id(&state.files, file),
                ..(*state).clone()
            }),
            Action::DeleteFile { file } => Arc::new(DatasetState {
                files: remove_by_id(&state.files, &file.id),
                ..(*state).clone()
            }),
            _ => state,
        }
    }
}
