use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Expected exactly {expected} images, got {actual} {location}")]
    ImageCount {
        expected: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("No images uploaded {location}")]
    NoImages { location: ErrorLocation },

    #[error("At most {max} images may be uploaded, got {actual} {location}")]
    TooManyImages {
        max: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("Image upload failed: {message} {location}")]
    Upload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image destroy failed: {message} {location}")]
    Destroy {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image host request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl MediaError {
    #[track_caller]
    pub fn upload<S: Into<String>>(message: S) -> Self {
        MediaError::Upload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Failure detail for API clients. Never includes the error location.
    pub fn client_detail(&self) -> String {
        match self {
            MediaError::ImageCount {
                expected, actual, ..
            } => format!("Expected exactly {} images, got {}", expected, actual),
            MediaError::NoImages { .. } => "No images uploaded".to_string(),
            MediaError::TooManyImages { max, actual, .. } => {
                format!("At most {} images may be uploaded, got {}", max, actual)
            }
            MediaError::Upload { message, .. } | MediaError::Destroy { message, .. } => {
                message.clone()
            }
            MediaError::Http { source, .. } => source.to_string(),
        }
    }

    /// True for caller mistakes (wrong image count), false for host failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MediaError::ImageCount { .. }
                | MediaError::NoImages { .. }
                | MediaError::TooManyImages { .. }
        )
    }
}

impl From<reqwest::Error> for MediaError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        MediaError::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MediaError>;
