use sc_server::{AppState, build_router, error::ServerError, logger};

use sc_auth::JwtValidator;
use sc_config::Config;
use sc_media::{CloudinaryClient, CloudinaryCredentials, ImageIngestion};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up SC_* overrides from a local .env when present
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Record store
    let pool = sc_db::connect(&config.database_path()?).await?;
    info!("Database ready");

    // Token verification
    let jwt_validator = Arc::new(build_jwt_validator(&config)?);
    info!("JWT: {} verification enabled", jwt_validator.algorithm());

    // Image host
    let cloudinary = CloudinaryClient::new(
        CloudinaryCredentials {
            base_url: config.media.base_url.clone(),
            cloud_name: config.media.cloud_name.clone(),
            api_key: config.media.api_key.clone(),
            api_secret: config.media.api_secret.clone(),
        },
        Duration::from_secs(config.media.timeout_secs),
    )?;
    let ingestion = ImageIngestion::new(Arc::new(cloudinary), config.media.folder.clone());

    let app_state = AppState {
        pool,
        jwt_validator,
        ingestion,
        validation: config.validation.clone(),
    };

    let app = build_router(app_state, config.server.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn build_jwt_validator(config: &Config) -> Result<JwtValidator, Box<dyn Error>> {
    if let Some(ref secret) = config.auth.jwt_secret {
        return Ok(JwtValidator::with_hs256(secret.as_bytes()));
    }

    match config.jwt_public_key_path()? {
        Some(full_path) => {
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            Ok(JwtValidator::with_rs256(&public_key)?)
        }
        None => Err(Box::new(ServerError::Config(sc_config::ConfigError::auth(
            "auth requires either jwt_secret or jwt_public_key_path",
        )))),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
