use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_CONTRIBUTORS: usize = 1;
pub const MAX_CONTRIBUTORS: usize = 1000;
pub const DEFAULT_MAX_CONTRIBUTORS: usize = 50;

/// Validation configuration for field limits.
///
/// These limits are applied to project submissions before any image is
/// uploaded or anything is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for project titles (characters)
    pub max_title_length: usize,
    /// Maximum length for project descriptions (characters)
    pub max_description_length: usize,
    /// Maximum number of contributor entries
    pub max_contributors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_contributors: DEFAULT_MAX_CONTRIBUTORS,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length > MAX_DESCRIPTION_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be at most {}, got {}",
                MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.max_contributors < MIN_CONTRIBUTORS || self.max_contributors > MAX_CONTRIBUTORS {
            return Err(ConfigError::config(format!(
                "validation.max_contributors must be {}-{}, got {}",
                MIN_CONTRIBUTORS, MAX_CONTRIBUTORS, self.max_contributors
            )));
        }

        Ok(())
    }
}
