//! HTTP side of the exchange layer: the backend client and its wire types.

mod client;
pub mod models;

pub use client::{ApiClient, Credential, DEFAULT_TIMEOUT};
pub use models::{DeletionRequest, ReviewAction, UploadResult, UploadTarget};

use crate::errors::AppResult;
use std::path::Path;

/// Remote bulk-ingestion endpoint.
pub trait IngestionApi {
    fn upload(&self, target: UploadTarget, file: &Path) -> AppResult<UploadResult>;
}

/// Remote deletion-request moderation endpoints.
pub trait ReviewApi {
    fn list_requests(&self) -> AppResult<Vec<DeletionRequest>>;
    fn review(&self, id: i64, action: ReviewAction) -> AppResult<()>;
}
