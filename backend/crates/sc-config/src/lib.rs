mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod media_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use media_config::MediaConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "SC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".showcase";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
/// Multipart bodies carry two raw images
const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;
const MIN_MAX_BODY_BYTES: usize = 64 * 1024;
const MAX_MAX_BODY_BYTES: usize = 200 * 1024 * 1024;

const DEFAULT_DATABASE_FILENAME: &str = "showcase.db";

const DEFAULT_MEDIA_BASE_URL: &str = "https://api.cloudinary.com";
const DEFAULT_MEDIA_FOLDER: &str = "projects";
const DEFAULT_MEDIA_TIMEOUT_SECS: u64 = 30;
const MIN_MEDIA_TIMEOUT_SECS: u64 = 1;
const MAX_MEDIA_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
