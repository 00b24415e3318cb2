use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::api::error::{status_error, ApiError};
use crate::api::models::{
    sort_versions_descending, DatasetIn, DatasetOut, DatasetPatch, DeleteResponse, FileOut,
    FilePreviews, FileVersion, JsonLdEntry, Listing, MetadataDefinitionIn,
    MetadataDefinitionOut, MetadataDelete, MetadataIn, MetadataOut, MetadataPatch, UserOut,
    VisualizationConfig,
};
use crate::api::upload::FileUpload;
use crate::config::{build_header_set, ApiConfig, AuthConfig, Config};

/// Which kind of resource a metadata request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataTarget {
    Dataset,
    File,
}

impl MetadataTarget {
    fn collection(self) -> &'static str {
        match self {
            MetadataTarget::Dataset => "datasets",
            MetadataTarget::File => "files",
        }
    }
}

/// Statuses a request treats as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// Any 2xx.
    Success,
    /// Exactly 200.
    OkOnly,
}

impl Expect {
    fn allows(self, status: StatusCode) -> bool {
        match self {
            Expect::Success => status.is_success(),
            Expect::OkOnly => status == StatusCode::OK,
        }
    }
}

/// Typed client for the platform REST API.
///
/// Versioned endpoints live under `{hostname}{api_prefix}`; the legacy
/// preview and JSON-LD endpoints sit directly under `{hostname}`.
pub struct ApiClient {
    client: Client,
    api: ApiConfig,
    auth: AuthConfig,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.api.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.api.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            api: config.api.clone(),
            auth: config.auth.clone(),
        })
    }

    /// Header set attached to every request; rebuilt per request so
    /// credential changes in the environment are honoured.
    fn headers(&self) -> HeaderMap {
        build_header_set(&self.auth)
    }

    fn endpoint(
        &self,
        base: String,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url, ApiError> {
        let mut url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: base.clone(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn v2(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        self.endpoint(self.api.v2_url(""), segments, query)
    }

    fn legacy(&self, segments: &[&str]) -> Result<Url, ApiError> {
        self.endpoint(self.api.base_url().to_string(), segments, &[])
    }

    fn paging(&self, skip: u32, limit: Option<u32>) -> Vec<(&'static str, String)> {
        vec![
            ("skip", skip.to_string()),
            ("limit", limit.unwrap_or(self.api.page_size).to_string()),
        ]
    }

    /// Send a request and return the raw body of a successful response.
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Body,
        expect: Expect,
    ) -> Result<Vec<u8>, ApiError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %method, %url, "sending request");

        let builder: RequestBuilder = self
            .client
            .request(method.clone(), url.clone())
            .headers(self.headers());
        let builder = match body {
            Body::Empty => builder,
            Body::Json(json) => builder.json(&json),
            Body::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(%request_id, %url, error = %source, "request failed");
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !expect.allows(status) {
            tracing::warn!(%request_id, %method, %url, status = status.as_u16(), "request rejected");
            return Err(status_error(status, &bytes));
        }

        tracing::debug!(%request_id, status = status.as_u16(), bytes = bytes.len(), "request finished");
        Ok(bytes.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Body,
    ) -> Result<T, ApiError> {
        self.fetch_expecting(method, url, body, Expect::Success).await
    }

    async fn fetch_expecting<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Body,
        expect: Expect,
    ) -> Result<T, ApiError> {
        let url_text = url.to_string();
        let bytes = self.send(method, url, body, expect).await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url_text,
            source,
        })
    }

    async fn fetch_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.fetch(Method::GET, url, Body::Empty).await?;
        Ok(listing.into_vec())
    }

    /// GET from a legacy endpoint, which must answer exactly 200.
    async fn fetch_legacy<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.fetch_expecting(Method::GET, url, Body::Empty, Expect::OkOnly)
            .await
    }

    /// Delete and return the id the server acknowledged, falling back to `id`.
    async fn delete(&self, url: Url, body: Body, id: &str) -> Result<String, ApiError> {
        let bytes = self.send(Method::DELETE, url, body, Expect::Success).await?;
        let ack: DeleteResponse = serde_json::from_slice(&bytes).unwrap_or_default();
        Ok(ack.id.unwrap_or_else(|| id.to_string()))
    }

    // Files

    pub async fn file_summary(&self, file_id: &str) -> Result<FileOut, ApiError> {
        let url = self.v2(&["files", file_id, "summary"], &[])?;
        self.fetch(Method::GET, url, Body::Empty).await
    }

    pub async fn file_extracted_metadata(&self, file_id: &str) -> Result<Value, ApiError> {
        let url = self.legacy(&["files", file_id, "extracted_metadata"])?;
        self.fetch_legacy(url).await
    }

    pub async fn file_metadata_jsonld(&self, file_id: &str) -> Result<Vec<JsonLdEntry>, ApiError> {
        let url = self.legacy(&["files", file_id, "metadata.jsonld"])?;
        let listing: Listing<JsonLdEntry> = self.fetch_legacy(url).await?;
        Ok(listing.into_vec())
    }

    pub async fn file_previews(&self, file_id: &str) -> Result<Vec<FilePreviews>, ApiError> {
        let url = self.legacy(&["files", file_id, "getPreviews"])?;
        let listing: Listing<FilePreviews> = self.fetch_legacy(url).await?;
        Ok(listing.into_vec())
    }

    pub async fn delete_file(&self, file_id: &str) -> Result<String, ApiError> {
        let url = self.v2(&["files", file_id], &[])?;
        self.delete(url, Body::Empty, file_id).await
    }

    pub async fn save_file(
        &self,
        dataset_id: &str,
        upload: FileUpload,
    ) -> Result<FileOut, ApiError> {
        let url = self.v2(&["datasets", dataset_id, "files"], &[])?;
        let form = upload.into_form()?;
        self.fetch(Method::POST, url, Body::Multipart(form)).await
    }

    pub async fn update_file(&self, file_id: &str, upload: FileUpload) -> Result<FileOut, ApiError> {
        let url = self.v2(&["files", file_id], &[])?;
        let form = upload.into_form()?;
        self.fetch(Method::PUT, url, Body::Multipart(form)).await
    }

    /// Versions of a file, newest first.
    pub async fn file_versions(
        &self,
        file_id: &str,
        skip: u32,
        limit: Option<u32>,
    ) -> Result<Vec<FileVersion>, ApiError> {
        let url = self.v2(&["files", file_id, "versions"], &self.paging(skip, limit))?;
        let mut versions: Vec<FileVersion> = self.fetch_list(url).await?;
        sort_versions_descending(&mut versions);
        Ok(versions)
    }

    pub async fn visualization_configs(
        &self,
        resource_id: &str,
    ) -> Result<Vec<VisualizationConfig>, ApiError> {
        let url = self.v2(&["visualizations", resource_id, "config"], &[])?;
        self.fetch_list(url).await
    }

    // Datasets

    pub async fn datasets(&self, skip: u32, limit: Option<u32>) -> Result<Vec<DatasetOut>, ApiError> {
        let url = self.v2(&["datasets"], &self.paging(skip, limit))?;
        self.fetch_list(url).await
    }

    pub async fn dataset(&self, dataset_id: &str) -> Result<DatasetOut, ApiError> {
        let url = self.v2(&["datasets", dataset_id], &[])?;
        self.fetch(Method::GET, url, Body::Empty).await
    }

    pub async fn dataset_files(&self, dataset_id: &str) -> Result<Vec<FileOut>, ApiError> {
        let url = self.v2(&["datasets", dataset_id, "files"], &[])?;
        self.fetch_list(url).await
    }

    pub async fn create_dataset(&self, form: &DatasetIn) -> Result<DatasetOut, ApiError> {
        let url = self.v2(&["datasets"], &[])?;
        self.fetch(Method::POST, url, Body::json(form)).await
    }

    pub async fn update_dataset(
        &self,
        dataset_id: &str,
        form: &DatasetPatch,
    ) -> Result<DatasetOut, ApiError> {
        let url = self.v2(&["datasets", dataset_id], &[])?;
        self.fetch(Method::PATCH, url, Body::json(form)).await
    }

    pub async fn delete_dataset(&self, dataset_id: &str) -> Result<String, ApiError> {
        let url = self.v2(&["datasets", dataset_id], &[])?;
        self.delete(url, Body::Empty, dataset_id).await
    }

    // Metadata definitions

    pub async fn metadata_definitions(
        &self,
        name: Option<&str>,
        skip: u32,
        limit: Option<u32>,
    ) -> Result<Vec<MetadataDefinitionOut>, ApiError> {
        let mut query = self.paging(skip, limit);
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }
        let url = self.v2(&["metadata", "definition"], &query)?;
        self.fetch_list(url).await
    }

    pub async fn metadata_definition(
        &self,
        definition_id: &str,
    ) -> Result<MetadataDefinitionOut, ApiError> {
        let url = self.v2(&["metadata", "definition", definition_id], &[])?;
        self.fetch(Method::GET, url, Body::Empty).await
    }

    pub async fn search_metadata_definitions(
        &self,
        term: &str,
        skip: u32,
        limit: Option<u32>,
    ) -> Result<Vec<MetadataDefinitionOut>, ApiError> {
        let url = self.v2(
            &["metadata", "definition", "search", term],
            &self.paging(skip, limit),
        )?;
        self.fetch_list(url).await
    }

    pub async fn save_metadata_definition(
        &self,
        definition: &MetadataDefinitionIn,
    ) -> Result<MetadataDefinitionOut, ApiError> {
        let url = self.v2(&["metadata", "definition"], &[])?;
        self.fetch(Method::POST, url, Body::json(definition)).await
    }

    pub async fn delete_metadata_definition(&self, definition_id: &str) -> Result<String, ApiError> {
        let url = self.v2(&["metadata", "definition", definition_id], &[])?;
        self.delete(url, Body::Empty, definition_id).await
    }

    // Metadata attached to datasets and files

    pub async fn metadata(
        &self,
        target: MetadataTarget,
        resource_id: &str,
    ) -> Result<Vec<MetadataOut>, ApiError> {
        let url = self.v2(&[target.collection(), resource_id, "metadata"], &[])?;
        self.fetch_list(url).await
    }

    pub async fn post_metadata(
        &self,
        target: MetadataTarget,
        resource_id: &str,
        metadata: &MetadataIn,
    ) -> Result<MetadataOut, ApiError> {
        let url = self.v2(&[target.collection(), resource_id, "metadata"], &[])?;
        self.fetch(Method::POST, url, Body::json(metadata)).await
    }

    pub async fn patch_metadata(
        &self,
        target: MetadataTarget,
        resource_id: &str,
        patch: &MetadataPatch,
    ) -> Result<MetadataOut, ApiError> {
        let url = self.v2(&[target.collection(), resource_id, "metadata"], &[])?;
        self.fetch(Method::PATCH, url, Body::json(patch)).await
    }

    pub async fn delete_metadata(
        &self,
        target: MetadataTarget,
        resource_id: &str,
        selector: &MetadataDelete,
    ) -> Result<String, ApiError> {
        let url = self.v2(&[target.collection(), resource_id, "metadata"], &[])?;
        self.delete(url, Body::json(selector), &selector.metadata_id)
            .await
    }

    // Users

    pub async fn user_profile(&self) -> Result<UserOut, ApiError> {
        let url = self.v2(&["users", "profile"], &[])?;
        self.fetch(Method::GET, url, Body::Empty).await
    }
}

/// Request payload.
enum Body {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl Body {
    fn json<T: Serialize>(payload: &T) -> Self {
        // Plain data records; serialising them to a Value cannot fail.
        Body::Json(serde_json::to_value(payload).unwrap_or(Value::Null))
    }
}
