use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MEDIA_BASE_URL, DEFAULT_MEDIA_FOLDER,
    DEFAULT_MEDIA_TIMEOUT_SECS, MAX_MEDIA_TIMEOUT_SECS, MIN_MEDIA_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Image host (Cloudinary) account and upload settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Logical folder images are stored under
    pub folder: String,
    /// Per-request timeout against the image host
    pub timeout_secs: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_MEDIA_BASE_URL),
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            folder: String::from(DEFAULT_MEDIA_FOLDER),
            timeout_secs: DEFAULT_MEDIA_TIMEOUT_SECS,
        }
    }
}

impl MediaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("media.cloud_name", &self.cloud_name),
            ("media.api_key", &self.api_key),
            ("media.api_secret", &self.api_secret),
            ("media.folder", &self.folder),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::media(format!("{} must be set", name)));
            }
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::media(format!(
                "media.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_MEDIA_TIMEOUT_SECS || self.timeout_secs > MAX_MEDIA_TIMEOUT_SECS
        {
            return Err(ConfigError::media(format!(
                "media.timeout_secs must be {}-{}, got {}",
                MIN_MEDIA_TIMEOUT_SECS, MAX_MEDIA_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
