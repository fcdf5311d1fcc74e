use sc_auth::JwtValidator;
use sc_config::ValidationConfig;
use sc_media::ImageIngestion;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared, immutable state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub ingestion: ImageIngestion,
    pub validation: ValidationConfig,
}
