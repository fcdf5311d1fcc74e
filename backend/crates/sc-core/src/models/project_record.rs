//! Project record - the single persisted entity.

use crate::{Contributors, Uploader, UserProfile};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of images every authenticated submission must carry.
pub const REQUIRED_IMAGE_COUNT: usize = 2;

/// A stored project. Records are never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// External form link
    pub external_link: Option<String>,
    pub contributors: Contributors,
    /// Fetchable image URLs, in submission order
    pub images: Vec<String>,
    pub uploader: Uploader,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a creation request. Id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub external_link: Option<String>,
    pub contributors: Contributors,
    pub images: Vec<String>,
    pub uploader: Uploader,
}

/// A record read together with its uploader's cached profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedProject {
    pub record: ProjectRecord,
    pub uploader_profile: Option<UserProfile>,
}

impl ProjectRecord {
    /// Assign an id and a millisecond-precision creation time.
    pub fn new(project: NewProject) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: project.title,
            description: project.description,
            external_link: project.external_link,
            contributors: project.contributors,
            images: project.images,
            uploader: project.uploader,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// True when the record references the given account as its uploader.
    pub fn is_uploaded_by(&self, identity_id: &str) -> bool {
        self.uploader.account_id() == Some(identity_id)
    }
}
