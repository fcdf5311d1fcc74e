use sc_core::{ExpandedProject, ProjectRecord, Uploader, UserProfile};

use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::Value;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub google_form_link: Option<String>,
    pub contributors: Vec<Value>,
    pub images: Vec<String>,
    pub uploader: UploaderDto,
    pub created_at: String,
}

/// Uploader as seen by clients.
///
/// `name`/`email` on an account uploader are only present once the account
/// has been expanded; an expanded account without a cached profile shows
/// them as `null`.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UploaderDto {
    Account {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<Option<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<Option<String>>,
    },
    #[serde(rename_all = "camelCase")]
    Submitted {
        uploaded_by: Option<String>,
        name: Option<String>,
        email: Option<String>,
    },
}

impl UploaderDto {
    fn expanded(uploader: Uploader, profile: Option<UserProfile>) -> Self {
        match uploader {
            Uploader::Account { id } => {
                let (name, email) = profile.map(|p| (p.name, p.email)).unwrap_or_default();
                UploaderDto::Account {
                    id,
                    name: Some(name),
                    email: Some(email),
                }
            }
            submitted => submitted.into(),
        }
    }
}

impl From<Uploader> for UploaderDto {
    fn from(uploader: Uploader) -> Self {
        match uploader {
            Uploader::Account { id } => UploaderDto::Account {
                id,
                name: None,
                email: None,
            },
            Uploader::Submitted {
                uploaded_by,
                name,
                email,
            } => UploaderDto::Submitted {
                uploaded_by,
                name,
                email,
            },
        }
    }
}

impl ProjectDto {
    fn build(record: ProjectRecord, uploader: impl FnOnce(Uploader) -> UploaderDto) -> Self {
        let ProjectRecord {
            id,
            title,
            description,
            external_link,
            contributors,
            images,
            uploader: stored_uploader,
            created_at,
        } = record;

        Self {
            id: id.to_string(),
            title,
            description,
            google_form_link: external_link,
            contributors: contributors.0,
            images,
            uploader: uploader(stored_uploader),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl From<ProjectRecord> for ProjectDto {
    fn from(record: ProjectRecord) -> Self {
        Self::build(record, UploaderDto::from)
    }
}

impl From<ExpandedProject> for ProjectDto {
    fn from(project: ExpandedProject) -> Self {
        let profile = project.uploader_profile;
        Self::build(project.record, |uploader| {
            UploaderDto::expanded(uploader, profile)
        })
    }
}
