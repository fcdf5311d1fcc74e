//! Who submitted a project.
//!
//! Authenticated submissions keep a reference to the account id and are
//! expanded to name/email when a single project is read. Anonymous
//! multipart submissions carry whatever identity text the form supplied.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const KIND_ACCOUNT: &str = "account";
pub const KIND_SUBMITTED: &str = "submitted";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Uploader {
    /// Reference to an authenticated identity
    Account { id: String },
    /// Denormalized identity text from an unauthenticated form
    #[serde(rename_all = "camelCase")]
    Submitted {
        uploaded_by: Option<String>,
        name: Option<String>,
        email: Option<String>,
    },
}

impl Uploader {
    pub fn account(id: impl Into<String>) -> Self {
        Uploader::Account { id: id.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Uploader::Account { .. } => KIND_ACCOUNT,
            Uploader::Submitted { .. } => KIND_SUBMITTED,
        }
    }

    /// Account id for referencing uploaders, `None` for form submissions.
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Uploader::Account { id } => Some(id),
            Uploader::Submitted { .. } => None,
        }
    }

    /// Rebuild from the stored discriminator and columns.
    #[track_caller]
    pub fn from_columns(
        kind: &str,
        account_id: Option<String>,
        uploaded_by: Option<String>,
        name: Option<String>,
        email: Option<String>,
    ) -> CoreErrorResult<Self> {
        match (kind, account_id) {
            (KIND_ACCOUNT, Some(id)) => Ok(Uploader::Account { id }),
            (KIND_SUBMITTED, _) => Ok(Uploader::Submitted {
                uploaded_by,
                name,
                email,
            }),
            (other, _) => Err(CoreError::InvalidUploaderKind {
                value: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
