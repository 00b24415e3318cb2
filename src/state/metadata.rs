use std::sync::Arc;

use serde::Serialize;

use crate::api::models::{MetadataDefinitionOut, MetadataOut};
use crate::mvi::{Reducer, SliceState};
use crate::state::action::Action;
use crate::state::list::{append, prepend, remove_by_id, replace_by_id};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetadataState {
    pub dataset_metadata_list: Vec<MetadataOut>,
    pub file_metadata_list: Vec<MetadataOut>,
    pub metadata_definition_list: Vec<MetadataDefinitionOut>,
    pub metadata_definition: MetadataDefinitionOut,
}

impl SliceState for MetadataState {}

pub struct MetadataReducer;

impl Reducer for MetadataReducer {
    type State = MetadataState;
    type Intent = Action;

    fn reduce(state: Arc<Self::State>, intent: &Self::Intent) -> Arc<Self::State> {
        match intent {
            Action::ReceiveMetadataDefinitions {
                metadata_definition_list,
            }
            | Action::SearchMetadataDefinitions {
                metadata_definition_list,
            } => Arc::new(MetadataState {
                metadata_definition_list: metadata_definition_list.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveMetadataDefinition {
                metadata_definition,
            } => Arc::new(MetadataState {
                metadata_definition: metadata_definition.clone(),
                ..(*state).clone()
            }),
            Action::DeleteMetadataDefinition {
                metadata_definition,
            } => Arc::new(MetadataState {
                metadata_definition_list: remove_by_id(
                    &state.metadata_definition_list,
                    &metadata_definition.id,
                ),
                ..(*state).clone()
            }),
            Action::SaveMetadataDefinition {
                metadata_definition,
            } => Arc::new(MetadataState {
                metadata_definition_list: prepend(
                    &state.metadata_definition_list,
                    metadata_definition,
                ),
                ..(*state).clone()
            }),
            Action::ReceiveDatasetMetadata { metadata_list } => Arc::new(MetadataState {
                dataset_metadata_list: metadata_list.clone(),
                ..(*state).clone()
            }),
            Action::ReceiveFileMetadata { metadata_list } => Arc::new(MetadataState {
                file_metadata_list: metadata_list.clone(),
                ..(*state).clone()
            }),
            Action::UpdateDatasetMetadata { metadata } => Arc::new(MetadataState {
                dataset_metadata_list: replace_by_id(&state.dataset_metadata_list, metadata),
                ..(*state).clone()
            }),
            Action::DeleteDatasetMetadata { metadata } => Arc::new(MetadataState {
                dataset_metadata_list: remove_by_id(&state.dataset_metadata_list, &metadata.id),
                ..(*state).clone()
            }),
            Action::DeleteFileMetadata { metadata } => Arc::new(MetadataState {
                file_metadata_list: remove_by_id(&state.file_metadata_list, &metadata.id),
                ..(*state).clone()
            }),
            Action::UpdateFileMetadata { metadata } => Arc::new(MetadataState {
                file_metadata_list: replace_by_id(&state.file_metadata_list, metadata),
                ..(*state).clone()
            }),
            Action::PostDatasetMetadata { metadata } => Arc::new(MetadataState {
                dataset_metadata_list: append(&state.dataset_metadata_list, metadata),
                ..(*state).clone()
            }),
            Action::PostFileMetadata { metadata } => Arc::new(MetadataState {
                file_metadata_list: append(&state.file_metadata_list, metadata),
                ..(*state).clone()
            }),
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::EntityRef;
    use serde_json::json;

    fn md(id: &str) -> MetadataOut {
        MetadataOut {
            id: id.to_string(),
            ..MetadataOut::default()
        }
    }

    fn md_with(id: &str, contents: serde_json::Value) -> MetadataOut {
        MetadataOut {
            id: id.to_string(),
            contents,
            ..MetadataOut::default()
        }
    }

    fn definition(id: &str) -> MetadataDefinitionOut {
        MetadataDefinitionOut {
            id: id.to_string(),
            name: id.to_uppercase(),
            ..MetadataDefinitionOut::default()
        }
    }

    #[test]
    fn delete_dataset_metadata_removes_only_matching_id() {
        let state = Arc::new(MetadataState {
            dataset_metadata_list: vec![md("a"), md("b")],
            file_metadata_list: vec![md("a")],
            ..MetadataState::default()
        });
        let next = MetadataReducer::reduce(
            state,
            &Action::DeleteDatasetMetadata {
                metadata: EntityRef::new("a"),
            },
        );
        assert_eq!(next.dataset_metadata_list, vec![md("b")]);
        assert_eq!(next.file_metadata_list, vec![md("a")]);
    }

    #[test]
    fn delete_file_metadata() {
        let state = Arc::new(MetadataState {
            file_metadata_list: vec![md("a"), md("b")],
            ..MetadataState::default()
        });
        let next = MetadataReducer::reduce(
            state,
            &Action::DeleteFileMetadata {
                metadata: EntityRef::new("b"),
            },
        );
        assert_eq!(next.file_metadata_list, vec![md("a")]);
    }

    #[test]
    fn update_metadata_maps_by_id() {
        let state = Arc::new(MetadataState {
            dataset_metadata_list: vec![md("a"), md("b")],
            file_metadata_list: vec![md("c")],
            ..MetadataState::default()
        });
        let next = MetadataReducer::reduce(
            state,
            &Action::UpdateDatasetMetadata {
                metadata: md_with("b", json!({"x": 1})),
            },
        );
        let next = MetadataReducer::reduce(
            next,
            &Action::UpdateFileMetadata {
                metadata: md_with("c", json!({"y": 2})),
            },
        );
        assert_eq!(
            next.dataset_metadata_list,
            vec![md("a"), md_with("b", json!({"x": 1}))]
        );
        assert_eq!(next.file_metadata_list, vec![md_with("c", json!({"y": 2}))]);
    }

    #[test]
    fn post_metadata_appends() {
        let state = MetadataReducer::reduce(
            Arc::default(),
            &Action::PostDatasetMetadata { metadata: md("a") },
        );
        let state = MetadataReducer::reduce(state, &Action::PostDatasetMetadata { metadata: md("b") });
        let state = MetadataReducer::reduce(state, &Action::PostFileMetadata { metadata: md("c") });
        assert_eq!(state.dataset_metadata_list, vec![md("a"), md("b")]);
        assert_eq!(state.file_metadata_list, vec![md("c")]);
    }

    #[test]
    fn receive_metadata_lists_replace_wholesale() {
        let state = Arc::new(MetadataState {
            dataset_metadata_list: vec![md("old")],
            ..MetadataState::default()
        });
        let state = MetadataReducer::reduce(
            state,
            &Action::ReceiveDatasetMetadata {
                metadata_list: vec![md("new")],
            },
        );
        let state = MetadataReducer::reduce(
            state,
            &Action::ReceiveFileMetadata {
                metadata_list: vec![md("f")],
            },
        );
        assert_eq!(state.dataset_metadata_list, vec![md("new")]);
        assert_eq!(state.file_metadata_list, vec![md("f")]);
    }

    #[test]
    fn definitions_receive_search_save_delete() {
        let state = MetadataReducer::reduce(
            Arc::default(),
            &Action::ReceiveMetadataDefinitions {
                metadata_definition_list: vec![definition("a"), definition("b")],
            },
        );
        let state = MetadataReducer::reduce(
            state,
            &Action::SaveMetadataDefinition {
                metadata_definition: definition("new"),
            },
        );
        assert_eq!(
            state.metadata_definition_list,
            vec![definition("new"), definition("a"), definition("b")]
        );

        let state = MetadataReducer::reduce(
            state,
            &Action::DeleteMetadataDefinition {
                metadata_definition: EntityRef::new("a"),
            },
        );
        assert_eq!(
            state.metadata_definition_list,
            vec![definition("new"), definition("b")]
        );

        let state = MetadataReducer::reduce(
            state,
            &Action::SearchMetadataDefinitions {
                metadata_definition_list: vec![definition("b")],
            },
        );
        assert_eq!(state.metadata_definition_list, vec![definition("b")]);

        let state = MetadataReducer::reduce(
            state,
            &Action::ReceiveMetadataDefinition {
                metadata_definition: definition("b"),
            },
        );
        assert_eq!(state.metadata_definition, definition("b"));
    }

    #[test]
    fn unrelated_action_keeps_reference() {
        let state = Arc::new(MetadataState {
            file_metadata_list: vec![md("a")],
            ..MetadataState::default()
        });
        let next = MetadataReducer::reduce(
            state.clone(),
            &Action::DeleteFile {
                file: EntityRef::new("a"),
            },
        );
        assert!(Arc::ptr_eq(&state, &next));
    }
}
