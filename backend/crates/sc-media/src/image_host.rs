//! Narrow interface to the external image host.
//!
//! Only `UploadedImage::url` ever reaches a project record; `public_id` is
//! kept just long enough to undo an upload when the request fails later.

use crate::Result as MediaResult;

use async_trait::async_trait;
use bytes::Bytes;

/// Raw image bytes held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ImagePayload {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: None,
            content_type: None,
            bytes: bytes.into(),
        }
    }
}

/// A stored image: its permanent URL and the host's handle for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Store one image under `folder` and return its permanent secure URL.
    async fn upload(&self, image: ImagePayload, folder: &str) -> MediaResult<UploadedImage>;

    /// Remove a previously uploaded image.
    async fn destroy(&self, public_id: &str) -> MediaResult<()>;
}
