//! Contributor descriptors attached to a project.
//!
//! Clients send contributors either as a JSON array or as the text encoding
//! of one (multipart forms can only carry text). Both shapes are normalised
//! into [`Contributors`] before anything is persisted. Blank text counts as
//! "no contributors"; anything else that is not a JSON array is rejected.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of contributor descriptors. Descriptor shape is client-defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contributors(pub Vec<Value>);

/// Wire shape of the `contributors` field before decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContributorsField {
    Encoded(String),
    List(Vec<Value>),
}

impl Contributors {
    /// Decode contributors from their JSON text encoding.
    #[track_caller]
    pub fn decode(encoded: &str) -> CoreErrorResult<Self> {
        if encoded.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str::<Vec<Value>>(encoded)
            .map(Self)
            .map_err(|source| CoreError::ContributorDecode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Encode contributors as JSON text (the storage and multipart form shape).
    #[track_caller]
    pub fn encode(&self) -> CoreErrorResult<String> {
        serde_json::to_string(&self.0).map_err(|source| CoreError::ContributorEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Normalise an optional request field. Absent means empty.
    #[track_caller]
    pub fn from_field(field: Option<ContributorsField>) -> CoreErrorResult<Self> {
        match field {
            None => Ok(Self::default()),
            Some(ContributorsField::List(items)) => Ok(Self(items)),
            Some(ContributorsField::Encoded(text)) => Self::decode(&text),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
