//! REST API access: typed client, entity models and uploads.

mod client;
mod error;
pub mod models;
mod upload;

pub use client::{ApiClient, MetadataTarget};
pub use error::ApiError;
pub use upload::{FileUpload, UploadError};
