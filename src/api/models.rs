//! Entity records mirrored from server responses.
//!
//! Deserialisation is lenient: unknown fields are ignored and missing
//! fields fall back to their defaults, so a partially populated response
//! still lands in the state tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything the reducers locate by id.
pub trait HasId {
    fn id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($ty:ty),* $(,)?) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

/// Bare reference to an entity, as carried by delete events.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserOut {
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserOut {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// MIME information of a stored file.
///
/// Newer servers send `{ "content_type": "...", "main_type": "..." }`,
/// older ones a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ContentTypeRepr")]
pub struct ContentType {
    pub content_type: String,
    pub main_type: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentTypeRepr {
    Plain(String),
    Structured {
        content_type: String,
        #[serde(default)]
        main_type: Option<String>,
    },
}

impl From<ContentTypeRepr> for ContentType {
    fn from(repr: ContentTypeRepr) -> Self {
        let (content_type, main_type) = match repr {
            ContentTypeRepr::Plain(content_type) => (content_type, None),
            ContentTypeRepr::Structured {
                content_type,
                main_type,
            } => (content_type, main_type),
        };
        let main_type = main_type.unwrap_or_else(|| {
            content_type
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string()
        });
        Self {
            content_type,
            main_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOut {
    pub id: String,
    #[serde(alias = "filename")]
    pub name: String,
    #[serde(alias = "content-type")]
    pub content_type: Option<ContentType>,
    #[serde(alias = "size")]
    pub bytes: u64,
    pub status: Option<String>,
    #[serde(alias = "thumbnail")]
    pub thumbnail_id: Option<String>,
    pub creator: Option<UserOut>,
    #[serde(rename = "authorId")]
    pub author_id: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created: Option<DateTime<Utc>>,
    pub version_num: u32,
    pub version_id: Option<String>,
    pub dataset_id: Option<String>,
    pub downloads: u64,
    #[serde(alias = "filedescription")]
    pub description: Option<String>,
}

impl FileOut {
    /// Display name of whoever uploaded the file.
    pub fn author(&self) -> Option<String> {
        self.creator
            .as_ref()
            .map(UserOut::full_name)
            .or_else(|| self.author_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVersion {
    pub id: String,
    pub file_id: String,
    pub version_id: String,
    pub version_num: u32,
    pub creator: Option<UserOut>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created: Option<DateTime<Utc>>,
}

/// Order versions newest first; versions without a date go last.
pub fn sort_versions_descending(versions: &mut [FileVersion]) {
    versions.sort_by(|a, b| b.created.cmp(&a.created));
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetOut {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub creator: Option<UserOut>,
    pub author: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub modified: Option<DateTime<Utc>>,
    pub thumbnail_id: Option<String>,
    pub status: Option<String>,
    pub views: u64,
    pub downloads: u64,
}

impl DatasetOut {
    pub fn author_name(&self) -> Option<String> {
        self.creator
            .as_ref()
            .map(UserOut::full_name)
            .or_else(|| self.author.clone())
    }
}

/// Body for creating a dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetIn {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for updating a dataset; absent fields are left alone by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reference from a metadata document to the resource it describes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoDbRef {
    pub collection: String,
    pub resource_id: String,
    pub version: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataAgent {
    pub creator: Option<UserOut>,
    #[serde(alias = "extractor")]
    pub listener: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataOut {
    pub id: String,
    pub resource: Option<MongoDbRef>,
    pub agent: Option<MetadataAgent>,
    #[serde(alias = "@context")]
    pub context: Option<Value>,
    pub context_url: Option<String>,
    pub definition: Option<String>,
    #[serde(alias = "content")]
    pub contents: Value,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created: Option<DateTime<Utc>>,
}

/// Body for attaching new metadata to a file or dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataIn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    pub contents: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_version: Option<u32>,
}

/// Body for merging fields into existing metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_id: Option<String>,
    pub contents: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_version: Option<u32>,
}

/// Body selecting the metadata document to delete.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataDelete {
    pub metadata_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataDefinitionOut {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(alias = "@context")]
    pub context: Option<Value>,
    pub context_url: Option<String>,
    /// Field schema of the definition.
    pub fields: Vec<Value>,
    pub creator: Option<UserOut>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetadataDefinitionIn {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_url: Option<String>,
    pub fields: Vec<Value>,
}

/// One entry of a file's JSON-LD metadata listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonLdEntry {
    #[serde(rename = "@context")]
    pub context: Option<Value>,
    pub agent: Option<Value>,
    pub content: Map<String, Value>,
    pub created_at: Option<String>,
}

/// Previews available for one file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePreviews {
    pub file_id: String,
    pub previews: Option<Vec<Preview>>,
}

/// A single preview and the previewer that can render it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    /// Previewer id, e.g. "Video" or "Thumbnail Viewer".
    pub p_id: String,
    /// Previewer asset directory.
    pub p_path: String,
    /// Previewer entry script.
    pub p_main: String,
    /// Route serving the preview content.
    pub pv_route: String,
    pub pv_id: String,
    pub pv_contenttype: String,
    pub pv_length: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub content_type: Option<ContentType>,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    pub id: String,
    pub resource: Option<MongoDbRef>,
    pub client: Option<String>,
    pub parameters: Map<String, Value>,
    pub visualization_mimetype: String,
    pub visualization_data: Vec<VisualizationData>,
}

impl_has_id!(
    EntityRef,
    FileOut,
    FileVersion,
    DatasetOut,
    MetadataOut,
    MetadataDefinitionOut,
    VisualizationConfig,
);

/// Acknowledgement of a delete; servers answer `{"deleted": id}` or `{"id": id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DeleteResponse {
    #[serde(alias = "deleted")]
    pub id: Option<String>,
}

/// List endpoints answer either a bare array or a paged envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Plain(Vec<T>),
    Paged { data: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Paged { data } => data,
            Listing::Plain(items) => items,
        }
    }
}

/// Lenient timestamp parsing: RFC 3339, or naive ISO-8601 taken as UTC.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }
}
