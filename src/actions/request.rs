//! Action creators as values.
//!
//! Each variant names one network operation. `perform` runs it and maps
//! the response onto the success action; failures are left to the
//! shared error handler.

use serde::Serialize;

use crate::api::models::{
    DatasetIn, DatasetPatch, EntityRef, MetadataDefinitionIn, MetadataDelete, MetadataIn,
    MetadataPatch,
};
use crate::api::{ApiClient, ApiError, FileUpload, MetadataTarget};
use crate::state::Action;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "creator", rename_all = "snake_case")]
pub enum ActionRequest {
    // Files
    FetchFileExtractedMetadata {
        file_id: String,
    },
    FetchFileSummary {
        file_id: String,
    },
    FetchFileMetadataJsonld {
        file_id: String,
    },
    FetchFilePreviews {
        file_id: String,
    },
    DeleteFile {
        file_id: String,
    },
    /// `upload` is a `data:` URI.
    CreateFile {
        dataset_id: String,
        #[serde(skip)]
        upload: String,
    },
    UpdateFile {
        file_id: String,
        #[serde(skip)]
        upload: String,
    },
    FetchFileVersions {
        file_id: String,
    },
    FetchVisualizationConfigs {
        resource_id: String,
    },

    // Datasets
    FetchDatasets {
        skip: u32,
        limit: Option<u32>,
    },
    FetchDatasetAbout {
        dataset_id: String,
    },
    FetchFilesInDataset {
        dataset_id: String,
    },
    CreateDataset {
        form: DatasetIn,
    },
    UpdateDataset {
        dataset_id: String,
        form: DatasetPatch,
    },
    DeleteDataset {
        dataset_id: String,
    },

    // Metadata definitions
    FetchMetadataDefinitions {
        name: Option<String>,
        skip: u32,
        limit: Option<u32>,
    },
    FetchMetadataDefinition {
        definition_id: String,
    },
    SearchMetadataDefinitions {
        term: String,
        skip: u32,
        limit: Option<u32>,
    },
    PostMetadataDefinition {
        definition: MetadataDefinitionIn,
    },
    DeleteMetadataDefinition {
        definition_id: String,
    },

    // Metadata on datasets and files
    FetchDatasetMetadata {
        dataset_id: String,
    },
    FetchFileMetadata {
        file_id: String,
    },
    PostDatasetMetadata {
        dataset_id: String,
        metadata: MetadataIn,
    },
    PostFileMetadata {
        file_id: String,
        metadata: MetadataIn,
    },
    PatchDatasetMetadata {
        dataset_id: String,
        patch: MetadataPatch,
    },
    PatchFileMetadata {
        file_id: String,
        patch: MetadataPatch,
    },
    DeleteDatasetMetadata {
        dataset_id: String,
        selector: MetadataDelete,
    },
    DeleteFileMetadata {
        file_id: String,
        selector: MetadataDelete,
    },

    // Users
    FetchUserProfile,
}

impl ActionRequest {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ActionRequest::FetchFileExtractedMetadata { .. } => "fetch_file_extracted_metadata",
            ActionRequest::FetchFileSummary { .. } => "fetch_file_summary",
            ActionRequest::FetchFileMetadataJsonld { .. } => "fetch_file_metadata_jsonld",
            ActionRequest::FetchFilePreviews { .. } => "fetch_file_previews",
            ActionRequest::DeleteFile { .. } => "delete_file",
            ActionRequest::CreateFile { .. } => "create_file",
            ActionRequest::UpdateFile { .. } => "update_file",
            ActionRequest::FetchFileVersions { .. } => "fetch_file_versions",
            ActionRequest::FetchVisualizationConfigs { .. } => "fetch_visualization_configs",
            ActionRequest::FetchDatasets { .. } => "fetch_datasets",
            ActionRequest::FetchDatasetAbout { .. } => "fetch_dataset_about",
            ActionRequest::FetchFilesInDataset { .. } => "fetch_files_in_dataset",
            ActionRequest::CreateDataset { .. } => "create_dataset",
            ActionRequest::UpdateDataset { .. } => "update_dataset",
            ActionRequest::DeleteDataset { .. } => "delete_dataset",
            ActionRequest::FetchMetadataDefinitions { .. } => "fetch_metadata_definitions",
            ActionRequest::FetchMetadataDefinition { .. } => "fetch_metadata_definition",
            ActionRequest::SearchMetadataDefinitions { .. } => "search_metadata_definitions",
            ActionRequest::PostMetadataDefinition { .. } => "post_metadata_definition",
            ActionRequest::DeleteMetadataDefinition { .. } => "delete_metadata_definition",
            ActionRequest::FetchDatasetMetadata { .. } => "fetch_dataset_metadata",
            ActionRequest::FetchFileMetadata { .. } => "fetch_file_metadata",
            ActionRequest::PostDatasetMetadata { .. } => "post_dataset_metadata",
            ActionRequest::PostFileMetadata { .. } => "post_file_metadata",
            ActionRequest::PatchDatasetMetadata { .. } => "patch_dataset_metadata",
            ActionRequest::PatchFileMetadata { .. } => "patch_file_metadata",
            ActionRequest::DeleteDatasetMetadata { .. } => "delete_dataset_metadata",
            ActionRequest::DeleteFileMetadata { .. } => "delete_file_metadata",
            ActionRequest::FetchUserProfile => "fetch_user_profile",
        }
    }

    /// Perform the network operation and build the success action.
    pub async fn perform(&self, client: &ApiClient) -> Result<Action, ApiError> {
        let action = match self {
            ActionRequest::FetchFileExtractedMetadata { file_id } => {
                Action::ReceiveFileExtractedMetadata {
                    extracted_metadata: client.file_extracted_metadata(file_id).await?,
                }
            }
            ActionRequest::FetchFileSummary { file_id } => Action::ReceiveFileSummary {
                file: client.file_summary(file_id).await?,
            },
            ActionRequest::FetchFileMetadataJsonld { file_id } => {
                Action::ReceiveFileMetadataJsonld {
                    metadata_jsonld: client.file_metadata_jsonld(file_id).await?,
                }
            }
            ActionRequest::FetchFilePreviews { file_id } => Action::ReceivePreviews {
                previews: client.file_previews(file_id).await?,
            },
            ActionRequest::DeleteFile { file_id } => Action::DeleteFile {
                file: EntityRef::new(client.delete_file(file_id).await?),
            },
            ActionRequest::CreateFile { dataset_id, upload } => {
                let upload = FileUpload::from_data_uri(upload)?;
                Action::CreateFile {
                    file: client.save_file(dataset_id, upload).await?,
                }
            }
            ActionRequest::UpdateFile { file_id, upload } => {
                let upload = FileUpload::from_data_uri(upload)?;
                Action::UpdateFile {
                    file: client.update_file(file_id, upload).await?,
                }
            }
            ActionRequest::FetchFileVersions { file_id } => Action::ReceiveVersions {
                file_versions: client.file_versions(file_id, 0, None).await?,
            },
            ActionRequest::FetchVisualizationConfigs { resource_id } => {
                Action::ReceiveVisualizationConfigs {
                    configs: client.visualization_configs(resource_id).await?,
                }
            }

            ActionRequest::FetchDatasets { skip, limit } => Action::ReceiveDatasets {
                datasets: client.datasets(*skip, *limit).await?,
            },
            ActionRequest::FetchDatasetAbout { dataset_id } => Action::ReceiveDatasetAbout {
                about: client.dataset(dataset_id).await?,
            },
            ActionRequest::FetchFilesInDataset { dataset_id } => Action::ReceiveFilesInDataset {
                files: client.dataset_files(dataset_id).await?,
            },
            ActionRequest::CreateDataset { form } => Action::CreateDataset {
                dataset: client.create_dataset(form).await?,
            },
            ActionRequest::UpdateDataset { dataset_id, form } => Action::UpdateDataset {
                about: client.update_dataset(dataset_id, form).await?,
            },
            ActionRequest::DeleteDataset { dataset_id } => Action::DeleteDataset {
                dataset: EntityRef::new(client.delete_dataset(dataset_id).await?),
            },

            ActionRequest::FetchMetadataDefinitions { name, skip, limit } => {
                Action::ReceiveMetadataDefinitions {
                    metadata_definition_list: client
                        .metadata_definitions(name.as_deref(), *skip, *limit)
                        .await?,
                }
            }
            ActionRequest::FetchMetadataDefinition { definition_id } => {
                Action::ReceiveMetadataDefinition {
                    metadata_definition: client.metadata_definition(definition_id).await?,
                }
            }
            ActionRequest::SearchMetadataDefinitions { term, skip, limit } => {
                Action::SearchMetadataDefinitions {
                    metadata_definition_list: client
                        .search_metadata_definitions(term, *skip, *limit)
                        .await?,
                }
            }
            ActionRequest::PostMetadataDefinition { definition } => {
                Action::SaveMetadataDefinition {
                    metadata_definition: client.save_metadata_definition(definition).await?,
                }
            }
            ActionRequest::DeleteMetadataDefinition { definition_id } => {
                Action::DeleteMetadataDefinition {
                    metadata_definition: EntityRef::new(
                        client.delete_metadata_definition(definition_id).await?,
                    ),
                }
            }

            ActionRequest::FetchDatasetMetadata { dataset_id } => Action::ReceiveDatasetMetadata {
                metadata_list: client.metadata(MetadataTarget::Dataset, dataset_id).await?,
            },
            ActionRequest::FetchFileMetadata { file_id } => Action::ReceiveFileMetadata {
                metadata_list: client.metadata(MetadataTarget::File, file_id).await?,
            },
            ActionRequest::PostDatasetMetadata {
                dataset_id,
                metadata,
            } => Action::PostDatasetMetadata {
                metadata: client
                    .post_metadata(MetadataTarget::Dataset, dataset_id, metadata)
                    .await?,
            },
            ActionRequest::PostFileMetadata { file_id, metadata } => Action::PostFileMetadata {
                metadata: client
                    .post_metadata(MetadataTarget::File, file_id, metadata)
                    .await?,
            },
            ActionRequest::PatchDatasetMetadata { dataset_id, patch } => {
                Action::UpdateDatasetMetadata {
                    metadata: client
                        .patch_metadata(MetadataTarget::Dataset, dataset_id, patch)
                        .await?,
                }
            }
            ActionRequest::PatchFileMetadata { file_id, patch } => Action::UpdateFileMetadata {
                metadata: client
                    .patch_metadata(MetadataTarget::File, file_id, patch)
                    .await?,
            },
            ActionRequest::DeleteDatasetMetadata {
                dataset_id,
                selector,
            } => Action::DeleteDatasetMetadata {
                metadata: EntityRef::new(
                    client
                        .delete_metadata(MetadataTarget::Dataset, dataset_id, selector)
                        .await?,
                ),
            },
            ActionRequest::DeleteFileMetadata { file_id, selector } => {
                Action::DeleteFileMetadata {
                    metadata: EntityRef::new(
                        client
                            .delete_metadata(MetadataTarget::File, file_id, selector)
                            .await?,
                    ),
                }
            }

            ActionRequest::FetchUserProfile => Action::ReceiveUserProfile {
                profile: client.user_profile().await?,
            },
        };
        Ok(action)
    }
}
