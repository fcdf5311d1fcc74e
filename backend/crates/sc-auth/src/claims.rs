use crate::{AuthError, Result as AuthErrorResult};

use sc_core::{Identity, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_SUBJECT_LENGTH: usize = 256;

/// JWT Claims structure issued by the external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Optional role; "admin" grants delete on any project
    #[serde(default)]
    pub role: Option<String>,
    /// Optional display name, cached for uploader expansion
    #[serde(default)]
    pub name: Option<String>,
    /// Optional email, cached for uploader expansion
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.sub,
            role: self.role.as_deref().map(Role::parse).unwrap_or_default(),
            name: self.name,
            email: self.email,
        }
    }
}
