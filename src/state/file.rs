use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::api::models::{FileOut, FilePreviews, FileVersion, JsonLdEntry, VisualizationConfig};
use crate::mvi::{Reducer, SliceState};
use crate::state::action::Action;

/// Everything known about the file currently being viewed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FileState {
    pub summary: FileOut,
    pub extracted_metadata: Value,
    pub metadata_jsonld: Vec<JsonLdEntry>,
    pub previews: Vec<FilePreviews>,
    pub versions: Vec<FileVersion>,
    pub visualization_configs: Vec<VisualizationConfig>,
}

impl SliceState for FileState {}

pub struct FileReducer;

impl Reducer for FileReducer {
    type State = FileState;
    type Intent = Action;

    fn reduce(state: Arc<Self::State>, intent: &Self::Intent) -> Arc<Self::State> {
        match intent {
            Action::ReceiveFileSummary { file } => Arc::new(FileState {
                summary: file.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveFileExtractedMetadata { extracted_metadata } => Arc::new(FileState {
                extracted_metadata: extracted_metadata.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveFileMetadataJsonld { metadata_jsonld } => Arc::new(FileState {
                metadata_jsonld: metadata_jsonld.clone(),
                ..(*state).clone()
            }),
            Action::ReceivePreviews { previews } => Arc::new(FileState {
                previews: previews.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveVersions { file_versions } => Arc::new(FileState {
                versions: file_versions.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveVisualizationConfigs { configs } => Arc::new(FileState {
                visualization_configs: configs.clone(),
                ..(*state).clone()
            }),
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn receive_summary_replaces_only_summary() {
        let before = Arc::new(FileState {
            extracted_metadata: json!({"k": 1}),
            ..FileState::default()
        });
        let file = FileOut {
            id: "f1".to_string(),
            name: "a.txt".to_string(),
            ..FileOut::default()
        };
        let after = FileReducer::reduce(
            before.clone(),
            &Action::ReceiveFileSummary { file: file.clone() },
        );
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.summary, file);
        assert_eq!(after.extracted_metadata, json!({"k": 1}));
        assert_eq!(before.summary, FileOut::default());
    }

    #[test]
    fn receive_extracted_metadata() {
        let after = FileReducer::reduce(
            Arc::default(),
            &Action::ReceiveFileExtractedMetadata {
                extracted_metadata: json!([{"extractor": "ocr"}]),
            },
        );
        assert_eq!(after.extracted_metadata, json!([{"extractor": "ocr"}]));
    }

    #[test]
    fn receive_previews_and_versions() {
        let previews = vec![FilePreviews {
            file_id: "f1".to_string(),
            previews: Some(vec![]),
        }];
        let state = FileReducer::reduce(
            Arc::default(),
            &Action::ReceivePreviews {
                previews: previews.clone(),
            },
        );
        let versions = vec![FileVersion {
            id: "v2".to_string(),
            ..FileVersion::default()
        }];
        let state = FileReducer::reduce(
            state,
            &Action::ReceiveVersions {
                file_versions: versions.clone(),
            },
        );
        assert_eq!(state.previews, previews);
        assert_eq!(state.versions, versions);
    }

    #[test]
    fn receive_jsonld_and_visualizations() {
        let entry = JsonLdEntry::default();
        let config = VisualizationConfig {
            id: "viz".to_string(),
            ..VisualizationConfig::default()
        };
        let state = FileReducer::reduce(
            Arc::default(),
            &Action::ReceiveFileMetadataJsonld {
                metadata_jsonld: vec![entry.clone()],
            },
        );
        let state = FileReducer::reduce(
            state,
            &Action::ReceiveVisualizationConfigs {
                configs: vec![config.clone()],
            },
        );
        assert_eq!(state.metadata_jsonld, vec![entry]);
        assert_eq!(state.visualization_configs, vec![config]);
    }

    #[test]
    fn unrelated_action_keeps_reference() {
        let before = Arc::new(FileState::default());
        let after = FileReducer::reduce(before.clone(), &Action::ResetFailed);
        assert!(Arc::ptr_eq(&before, &after));
    }
}
