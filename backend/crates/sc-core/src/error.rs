use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to decode contributors: {source} {location}")]
    ContributorDecode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to encode contributors: {source} {location}")]
    ContributorEncode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid uploader kind: {value} {location}")]
    InvalidUploaderKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
