//! Image ingestion for project submissions.
//!
//! Two paths exist. Authenticated JSON submissions carry images that are
//! already encoded (URLs or data URIs); those pass through untouched once
//! the count is checked. Anonymous multipart submissions carry raw bytes,
//! which are uploaded to the image host concurrently.
//!
//! A raw batch is all-or-nothing: if any upload fails, the uploads that did
//! succeed are destroyed (best effort) before the error is returned, so a
//! failed request leaves no orphaned images behind. Callers that fail after
//! a successful batch (e.g. on insert) call [`ImageIngestion::rollback`].

use crate::{ImageHost, ImagePayload, MediaError, Result as MediaResult, UploadedImage};

use sc_core::models::project_record::REQUIRED_IMAGE_COUNT;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use futures::future::join_all;
use log::{debug, info, warn};

/// Images uploaded by one request, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    pub images: Vec<UploadedImage>,
}

impl UploadBatch {
    pub fn urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Clone)]
pub struct ImageIngestion {
    host: Arc<dyn ImageHost>,
    folder: String,
}

impl ImageIngestion {
    pub fn new(host: Arc<dyn ImageHost>, folder: impl Into<String>) -> Self {
        Self {
            host,
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Accept pre-encoded images verbatim. Exactly two are required.
    #[track_caller]
    pub fn pass_through(images: Vec<String>) -> MediaResult<Vec<String>> {
        if images.len() != REQUIRED_IMAGE_COUNT {
            return Err(MediaError::ImageCount {
                expected: REQUIRED_IMAGE_COUNT,
                actual: images.len(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(images)
    }

    /// A raw batch holds at least one and at most two images.
    #[track_caller]
    pub fn check_batch_size(count: usize) -> MediaResult<()> {
        if count == 0 {
            return Err(MediaError::NoImages {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if count > REQUIRED_IMAGE_COUNT {
            return Err(MediaError::TooManyImages {
                max: REQUIRED_IMAGE_COUNT,
                actual: count,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Upload one or two raw images concurrently and wait for all of them.
    pub async fn upload_all(&self, payloads: Vec<ImagePayload>) -> MediaResult<UploadBatch> {
        Self::check_batch_size(payloads.len())?;

        let total = payloads.len();
        debug!("Uploading {} image(s) to folder '{}'", total, self.folder);

        let results = join_all(
            payloads
                .into_iter()
                .map(|payload| self.host.upload(payload, &self.folder)),
        )
        .await;

        let mut uploaded = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(image) => uploaded.push(image),
                Err(e) => failures.push(e),
            }
        }

        let batch = UploadBatch { images: uploaded };

        if let Some(first) = failures.into_iter().next() {
            warn!(
                "{} of {} image upload(s) failed, rolling back {} uploaded image(s)",
                total - batch.len(),
                total,
                batch.len()
            );
            self.rollback(&batch).await;
            return Err(MediaError::upload(first.client_detail()));
        }

        info!("Uploaded {} image(s) to folder '{}'", batch.len(), self.folder);
        Ok(batch)
    }

    /// Best-effort removal of a batch's images. Failures are logged, never returned.
    pub async fn rollback(&self, batch: &UploadBatch) {
        let results = join_all(
            batch
                .images
                .iter()
                .map(|image| self.host.destroy(&image.public_id)),
        )
        .await;

        for (image, result) in batch.images.iter().zip(results) {
            match result {
                Ok(()) => debug!("Rolled back image {}", image.public_id),
                Err(e) => warn!("Failed to roll back image {}: {}", image.public_id, e),
            }
        }
    }
}
