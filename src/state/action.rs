use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

use crate::actions::ActionRequest;
use crate::api::models::{
    DatasetOut, EntityRef, FileOut, FilePreviews, FileVersion, JsonLdEntry,
    MetadataDefinitionOut, MetadataOut, UserOut, VisualizationConfig,
};
use crate::mvi::Intent;

/// Every event the store understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // Files
    ReceiveFileSummary {
        file: FileOut,
    },
    ReceiveFileExtractedMetadata {
        extracted_metadata: Value,
    },
    ReceiveFileMetadataJsonld {
        metadata_jsonld: Vec<JsonLdEntry>,
    },
    ReceivePreviews {
        previews: Vec<FilePreviews>,
    },
    ReceiveVersions {
        file_versions: Vec<FileVersion>,
    },
    ReceiveVisualizationConfigs {
        configs: Vec<VisualizationConfig>,
    },
    DeleteFile {
        file: EntityRef,
    },
    CreateFile {
        file: FileOut,
    },
    UpdateFile {
        file: FileOut,
    },

    // Datasets
    ReceiveDatasets {
        datasets: Vec<DatasetOut>,
    },
    ReceiveDatasetAbout {
        about: DatasetOut,
    },
    ReceiveFilesInDataset {
        files: Vec<FileOut>,
    },
    CreateDataset {
        dataset: DatasetOut,
    },
    UpdateDataset {
        about: DatasetOut,
    },
    DeleteDataset {
        dataset: EntityRef,
    },

    // Metadata
    ReceiveMetadataDefinitions {
        metadata_definition_list: Vec<MetadataDefinitionOut>,
    },
    ReceiveMetadataDefinition {
        metadata_definition: MetadataDefinitionOut,
    },
    SearchMetadataDefinitions {
        metadata_definition_list: Vec<MetadataDefinitionOut>,
    },
    #[serde(rename = "SAVE_METADATA_DEFINITIONS")]
    SaveMetadataDefinition {
        metadata_definition: MetadataDefinitionOut,
    },
    DeleteMetadataDefinition {
        metadata_definition: EntityRef,
    },
    ReceiveDatasetMetadata {
        metadata_list: Vec<MetadataOut>,
    },
    ReceiveFileMetadata {
        metadata_list: Vec<MetadataOut>,
    },
    PostDatasetMetadata {
        metadata: MetadataOut,
    },
    PostFileMetadata {
        metadata: MetadataOut,
    },
    UpdateDatasetMetadata {
        metadata: MetadataOut,
    },
    UpdateFileMetadata {
        metadata: MetadataOut,
    },
    DeleteDatasetMetadata {
        metadata: EntityRef,
    },
    DeleteFileMetadata {
        metadata: EntityRef,
    },

    // Users
    ReceiveUserProfile {
        profile: UserOut,
    },

    // Errors
    Failed {
        reason: String,
        status: Option<u16>,
        origin: ActionRequest,
    },
    ResetFailed,
}

impl Action {
    pub fn is_failure(&self) -> bool {
        matches!(self, Action::Failed { .. })
    }
}

impl Intent for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::ReceiveFileSummary { .. } => "RECEIVE_FILE_SUMMARY",
            Action::ReceiveFileExtractedMetadata { .. } => "RECEIVE_FILE_EXTRACTED_METADATA",
            Action::ReceiveFileMetadataJsonld { .. } => "RECEIVE_FILE_METADATA_JSONLD",
            Action::ReceivePreviews { .. } => "RECEIVE_PREVIEWS",
            Action::ReceiveVersions { .. } => "RECEIVE_VERSIONS",
            Action::ReceiveVisualizationConfigs { .. } => "RECEIVE_VISUALIZATION_CONFIGS",
            Action::DeleteFile { .. } => "DELETE_FILE",
            Action::CreateFile { .. } => "CREATE_FILE",
            Action::UpdateFile { .. } => "UPDATE_FILE",
            Action::ReceiveDatasets { .. } => "RECEIVE_DATASETS",
            Action::ReceiveDatasetAbout { .. } => "RECEIVE_DATASET_ABOUT",
            Action::ReceiveFilesInDataset { .. } => "RECEIVE_FILES_IN_DATASET",
            Action::CreateDataset { .. } => "CREATE_DATASET",
            Action::UpdateDataset { .. } => "UPDATE_DATASET",
            Action::DeleteDataset { .. } => "DELETE_DATASET",
            Action::ReceiveMetadataDefinitions { .. } => "RECEIVE_METADATA_DEFINITIONS",
            Action::ReceiveMetadataDefinition { .. } => "RECEIVE_METADATA_DEFINITION",
            Action::SearchMetadataDefinitions { .. } => "SEARCH_METADATA_DEFINITIONS",
            Action::SaveMetadataDefinition { .. } => "SAVE_METADATA_DEFINITIONS",
            Action::DeleteMetadataDefinition { .. } => "DELETE_METADATA_DEFINITION",
            Action::ReceiveDatasetMetadata { .. } => "RECEIVE_DATASET_METADATA",
            Action::ReceiveFileMetadata { .. } => "RECEIVE_FILE_METADATA",
            Action::PostDatasetMetadata { .. } => "POST_DATASET_METADATA",
            Action::PostFileMetadata { .. } => "POST_FILE_METADATA",
            Action::UpdateDatasetMetadata { .. } => "UPDATE_DATASET_METADATA",
            Action::UpdateFileMetadata { .. } => "UPDATE_FILE_METADATA",
            Action::DeleteDatasetMetadata { .. } => "DELETE_DATASET_METADATA",
            Action::DeleteFileMetadata { .. } => "DELETE_FILE_METADATA",
            Action::ReceiveUserProfile { .. } => "RECEIVE_USER_PROFILE",
            Action::Failed { .. } => "FAILED",
            Action::ResetFailed => "RESET_FAILED",
        }
    }
}

/// A dispatched action together with the time it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub action: Action,
    pub received_at: SystemTime,
}

impl Event {
    pub fn now(action: Action) -> Self {
        Self {
            action,
            received_at: SystemTime::now(),
        }
    }

    /// Receipt time in milliseconds since the Unix epoch.
    pub fn received_at_millis(&self) -> u128 {
        self.received_at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}
