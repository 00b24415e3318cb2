//! File uploads carried as data URIs.
//!
//! Upload forms hand the file over as
//! `data:<mime>;name=<filename>;base64,<payload>`; it is decoded here
//! before the multipart request is built.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("data URI has no ',' separating header and payload")]
    MissingPayload,

    #[error("data URI header '{0}' does not start with 'data:'")]
    NotDataUri(String),

    #[error("data URI header '{0}' has no MIME type")]
    MissingMime(String),

    #[error("data URI header '{0}' has no name= parameter")]
    MissingName(String),

    #[error("data URI payload is not base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid MIME type '{mime}': {source}")]
    InvalidMime {
        mime: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A decoded file ready to be sent as a multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Decode a `data:` URI into filename, MIME type and bytes.
    pub fn from_data_uri(uri: &str) -> Result<Self, UploadError> {
        let (header, payload) = uri.split_once(',').ok_or(UploadError::MissingPayload)?;
        let params = header
            .strip_prefix("data:")
            .ok_or_else(|| UploadError::NotDataUri(header.to_string()))?;

        let mut parts = params.split(';');
        let mime = parts
            .next()
            .filter(|mime| !mime.is_empty())
            .ok_or_else(|| UploadError::MissingMime(header.to_string()))?
            .to_string();

        let mut filename = None;
        let mut is_base64 = false;
        for part in parts {
            if let Some(name) = part.strip_prefix("name=") {
                filename = Some(name.to_string());
            } else if part == "base64" {
                is_base64 = true;
            }
        }
        let filename = filename.ok_or_else(|| UploadError::MissingName(header.to_string()))?;

        let bytes = if is_base64 {
            STANDARD.decode(payload.trim())?
        } else {
            payload.as_bytes().to_vec()
        };

        Ok(Self {
            filename,
            mime,
            bytes,
        })
    }

    /// Multipart form with the file under the `file` field.
    pub fn into_form(self) -> Result<Form, UploadError> {
        let part = Part::bytes(self.bytes)
            .file_name(self.filename)
            .mime_str(&self.mime)
            .map_err(|source| UploadError::InvalidMime {
                mime: self.mime.clone(),
                source,
            })?;
        Ok(Form::new().part("file", part))
    }
}
