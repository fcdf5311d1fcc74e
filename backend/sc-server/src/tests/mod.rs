mod api;

use crate::AppState;

use sc_auth::JwtValidator;
use sc_config::ValidationConfig;
use sc_media::{ImageHost, ImageIngestion, ImagePayload, UploadedImage};

use std::sync::Arc;

use async_trait::async_trait;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-at-least-32-bytes";

/// Image host for tests that never reach the upload path
struct UnusedHost;

#[async_trait]
impl ImageHost for UnusedHost {
    async fn upload(&self, _image: ImagePayload, _folder: &str) -> sc_media::Result<UploadedImage> {
        Err(sc_media::MediaError::upload("not available in unit tests"))
    }

    async fn destroy(&self, _public_id: &str) -> sc_media::Result<()> {
        Ok(())
    }
}

pub(crate) async fn create_test_state() -> AppState {
    AppState {
        pool: sc_db::connect_in_memory()
            .await
            .expect("Failed to create test pool"),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        ingestion: ImageIngestion::new(Arc::new(UnusedHost), sc_media::DEFAULT_FOLDER),
        validation: ValidationConfig::default(),
    }
}
