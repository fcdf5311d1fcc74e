//! Submission fields shared by both creation flows.

use crate::{ApiError, ApiResult};

use sc_config::ValidationConfig;
use sc_core::{Contributors, NewProject, Uploader};

/// Decoded text fields of a submission, ready to be checked against limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub external_link: Option<String>,
    pub contributors: Contributors,
}

impl ProjectInput {
    /// Enforce configured length limits. Lengths count characters, not bytes.
    #[track_caller]
    pub fn validate(&self, limits: &ValidationConfig) -> ApiResult<()> {
        if self.title.chars().count() > limits.max_title_length {
            return Err(ApiError::validation(
                format!(
                    "Title must be at most {} characters",
                    limits.max_title_length
                ),
                Some("title"),
            ));
        }

        if self.description.chars().count() > limits.max_description_length {
            return Err(ApiError::validation(
                format!(
                    "Description must be at most {} characters",
                    limits.max_description_length
                ),
                Some("description"),
            ));
        }

        if self.contributors.len() > limits.max_contributors {
            return Err(ApiError::validation(
                format!(
                    "At most {} contributors are allowed",
                    limits.max_contributors
                ),
                Some("contributors"),
            ));
        }

        Ok(())
    }

    pub fn into_new_project(self, images: Vec<String>, uploader: Uploader) -> NewProject {
        NewProject {
            title: self.title,
            description: self.description,
            external_link: self.external_link,
            contributors: self.contributors,
            images,
            uploader,
        }
    }
}

/// Blank optional text is treated as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
