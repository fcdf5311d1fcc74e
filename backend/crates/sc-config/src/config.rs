use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, MediaConfig, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub media: MediaConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SC_CONFIG_DIR env var, else use ./.showcase/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SC_CONFIG_DIR env var > ./.showcase/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.media.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the RS256 public key, if configured.
    pub fn jwt_public_key_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.auth.jwt_public_key_path {
            Some(path) => Ok(Some(Self::config_dir()?.join(path))),
            None => Ok(None),
        }
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (body limit {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );
        info!("  database: {}", self.database.path);
        info!("  auth: {}", self.auth.algorithm());
        info!(
            "  media: cloud={}, folder={}, timeout={}s",
            self.media.cloud_name, self.media.folder, self.media.timeout_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: title={}, desc={}, contributors={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_contributors
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SC_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("SC_SERVER_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Database
        Self::apply_env_string("SC_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("SC_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "SC_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );

        // Media
        Self::apply_env_string("SC_MEDIA_BASE_URL", &mut self.media.base_url);
        Self::apply_env_string("SC_MEDIA_CLOUD_NAME", &mut self.media.cloud_name);
        Self::apply_env_string("SC_MEDIA_API_KEY", &mut self.media.api_key);
        Self::apply_env_string("SC_MEDIA_API_SECRET", &mut self.media.api_secret);
        Self::apply_env_string("SC_MEDIA_FOLDER", &mut self.media.folder);
        Self::apply_env_parse("SC_MEDIA_TIMEOUT_SECS", &mut self.media.timeout_secs);

        // Logging
        Self::apply_env_parse("SC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SC_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "SC_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "SC_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "SC_VALIDATION_MAX_CONTRIBUTORS",
            &mut self.validation.max_contributors,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
