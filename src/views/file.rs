use serde::Serialize;

use crate::actions::ActionRequest;
use crate::api::models::{FilePreviews, JsonLdEntry};
use crate::state::RootState;
use crate::views::{Container, MountGuard, ViewContext};

/// One previewer instance for one preview of the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewerConfiguration {
    /// Css class of the container, derived from the previewer id.
    #[serde(rename = "className")]
    pub class_name: String,
    pub tab: String,
    pub url: String,
    pub fileid: String,
    pub previewer: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "APIKEY")]
    pub api_key: Option<String>,
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FileViewModel {
    pub id: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub created: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub size: u64,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    /// `key - json` line per JSON-LD content entry.
    pub metadata_jsonld: Vec<String>,
    pub previewers: Vec<PreviewerConfiguration>,
    /// Previewer entry scripts to load, one per distinct previewer.
    pub previewer_scripts: Vec<String>,
}

/// The file page.
pub struct FileView;

impl FileView {
    /// Requests issued when a file is selected.
    pub fn select_file(file_id: &str) -> Vec<ActionRequest> {
        vec![
            ActionRequest::FetchFileSummary {
                file_id: file_id.to_string(),
            },
            ActionRequest::FetchFileExtractedMetadata {
                file_id: file_id.to_string(),
            },
            ActionRequest::FetchFileMetadataJsonld {
                file_id: file_id.to_string(),
            },
            ActionRequest::FetchFilePreviews {
                file_id: file_id.to_string(),
            },
        ]
    }

    /// Switch a mounted file page to another file.
    pub fn reselect(guard: &MountGuard, file_id: &str) {
        for request in Self::select_file(file_id) {
            guard.trigger(request);
        }
    }
}

impl Container for FileView {
    type Props = String;
    type ViewModel = FileViewModel;

    fn on_mount(file_id: &String) -> Vec<ActionRequest> {
        Self::select_file(file_id)
    }

    fn render(state: &RootState, _file_id: &String, ctx: &ViewContext) -> FileViewModel {
        let summary = &state.file.summary;
        let first = state.file.previews.first();

        FileViewModel {
            id: summary.id.clone(),
            filename: summary.name.clone(),
            content_type: summary
                .content_type
                .as_ref()
                .map(|ct| ct.content_type.clone()),
            created: summary.created.map(|created| created.to_rfc3339()),
            author: summary.author(),
            description: summary.description.clone(),
            size: summary.bytes,
            status: summary.status.clone(),
            thumbnail: summary.thumbnail_id.clone(),
            metadata_jsonld: jsonld_lines(&state.file.metadata_jsonld),
            previewers: first
                .map(|previews| previewer_configurations(previews, ctx))
                .unwrap_or_default(),
            previewer_scripts: first.map(previewer_scripts).unwrap_or_default(),
        }
    }
}

fn jsonld_lines(entries: &[JsonLdEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| {
            entry
                .content
                .iter()
                .map(|(key, value)| format!("{} - {}", key, value))
        })
        .collect()
}

fn previewer_configurations(
    previews: &FilePreviews,
    ctx: &ViewContext,
) -> Vec<PreviewerConfiguration> {
    let Some(list) = previews.previews.as_ref() else {
        return Vec::new();
    };

    list.iter()
        .enumerate()
        .map(|(index, preview)| PreviewerConfiguration {
            class_name: preview.p_id.replacen(' ', "-", 1).to_lowercase(),
            tab: format!("#previewer_{}_{}", previews.file_id, index),
            url: format!("{}{}?superAdmin=true", ctx.hostname, preview.pv_route),
            fileid: preview.pv_id.clone(),
            previewer: format!("/public{}/", preview.p_path),
            file_type: preview.pv_contenttype.clone(),
            api_key: ctx.api_key.clone(),
            authenticated: true,
        })
        .collect()
}

/// Entry scripts of the previewers, first occurrence of each previewer id.
fn previewer_scripts(previews: &FilePreviews) -> Vec<String> {
    let Some(list) = previews.previews.as_ref() else {
        return Vec::new();
    };

    let mut seen: Vec<&str> = Vec::new();
    let mut scripts = Vec::new();
    for preview in list {
        if seen.contains(&preview.p_id.as_str()) {
            continue;
        }
        seen.push(&preview.p_id);
        scripts.push(format!("../public{}/{}", preview.p_path, preview.p_main));
    }
    scripts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{FileOut, Preview};
    use crate::state::Action;
    use serde_json::json;

    fn ctx() -> ViewContext {
        ViewContext {
            hostname: "http://clowder.test".to_string(),
            api_prefix: "/api/v2".to_string(),
            api_key: Some("key".to_string()),
        }
    }

    fn preview(p_id: &str, pv_id: &str) -> Preview {
        Preview {
            p_id: p_id.to_string(),
            p_path: format!("/assets/previewers/{}", p_id.to_lowercase()),
            p_main: "main.js".to_string(),
            pv_route: format!("/files/{}/blob", pv_id),
            pv_id: pv_id.to_string(),
            pv_contenttype: "video/mp4".to_string(),
            pv_length: None,
        }
    }

    #[test]
    fn mount_requests_cover_all_file_tabs() {
        let requests = FileView::on_mount(&"f1".to_string());
        let labels: Vec<&str> = requests.iter().map(ActionRequest::label).collect();
        assert_eq!(
            labels,
            vec![
                "fetch_file_summary",
                "fetch_file_extracted_metadata",
                "fetch_file_metadata_jsonld",
                "fetch_file_previews",
            ]
        );
    }

    #[test]
    fn renders_summary_and_jsonld() {
        let entry: JsonLdEntry =
            serde_json::from_value(json!({"content": {"color": "blue", "count": 3}})).unwrap();
        let state = RootState::default()
            .reduce(&Action::ReceiveFileSummary {
                file: FileOut {
                    id: "f1".to_string(),
                    name: "clip.mp4".to_string(),
                    bytes: 1024,
                    ..FileOut::default()
                },
            })
            .reduce(&Action::ReceiveFileMetadataJsonld {
                metadata_jsonld: vec![entry],
            });

        let view = FileView::render(&state, &"f1".to_string(), &ctx());
        assert_eq!(view.filename, "clip.mp4");
        assert_eq!(view.size, 1024);
        assert_eq!(view.metadata_jsonld, vec!["color - \"blue\"", "count - 3"]);
        assert!(view.previewers.is_empty());
    }

    #[test]
    fn previewer_configuration_per_preview_and_unique_scripts() {
        let previews = vec![FilePreviews {
            file_id: "f1".to_string(),
            previews: Some(vec![
                preview("Video Player", "p1"),
                preview("Video Player", "p2"),
                preview("Thumbnail", "p3"),
            ]),
        }];
        let state = RootState::default().reduce(&Action::ReceivePreviews { previews });
        let view = FileView::render(&state, &"f1".to_string(), &ctx());

        assert_eq!(view.previewers.len(), 3);
        let first = &view.previewers[0];
        assert_eq!(first.class_name, "video-player");
        assert_eq!(first.tab, "#previewer_f1_0");
        assert_eq!(first.url, "http://clowder.test/files/p1/blob?superAdmin=true");
        assert_eq!(first.previewer, "/public/assets/previewers/video player/");
        assert_eq!(first.api_key.as_deref(), Some("key"));
        assert!(first.authenticated);
        assert_eq!(view.previewers[2].tab, "#previewer_f1_2");

        assert_eq!(
            view.previewer_scripts,
            vec![
                "../public/assets/previewers/video player/main.js",
                "../public/assets/previewers/thumbnail/main.js",
            ]
        );
    }

    #[test]
    fn previews_without_list_render_nothing() {
        let previews = vec![FilePreviews {
            file_id: "f1".to_string(),
            previews: None,
        }];
        let state = RootState::default().reduce(&Action::ReceivePreviews { previews });
        let view = FileView::render(&state, &"f1".to_string(), &ctx());
        assert!(view.previewers.is_empty());
        assert!(view.previewer_scripts.is_empty());
    }
}
