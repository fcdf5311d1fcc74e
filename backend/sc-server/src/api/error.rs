//! REST API error types
//!
//! Every failure leaving a handler becomes a JSON body of the shape
//! `{"message", "code", "error"?, "field"?}` with a matching status code.

use sc_auth::AuthError;
use sc_core::CoreError;
use sc_db::DbError;
use sc_media::MediaError;

use std::panic::Location;

use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Underlying failure detail, when safe to expose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Request body over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// No valid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Encoded request text could not be decoded (500)
    #[error("Decode failed: {message} {location}")]
    Decode {
        message: String,
        error: Option<String>,
        location: ErrorLocation,
    },

    /// Image host failure (500)
    #[error("Upload failed: {message} {location}")]
    Upload {
        message: String,
        error: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error, including persistence failures (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        error: Option<String>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Body rejections keep 413 apart from malformed input
    #[track_caller]
    fn rejected(status: StatusCode, message: String) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge { message, location }
        } else {
            ApiError::Validation {
                message,
                field: None,
                location,
            }
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Decode { .. } | ApiError::Upload { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Decode { .. } => "DECODE_ERROR",
            ApiError::Upload { .. } => "UPLOAD_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                message,
                code,
                error: None,
                field,
            },
            ApiError::PayloadTooLarge { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. } => ApiErrorBody {
                message,
                code,
                error: None,
                field: None,
            },
            ApiError::Decode { message, error, .. }
            | ApiError::Upload { message, error, .. }
            | ApiError::Internal { message, error, .. } => ApiErrorBody {
                message,
                code,
                error,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            error: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::ContributorDecode { source, .. } => ApiError::Decode {
                message: "Invalid contributors: expected a JSON array".to_string(),
                error: Some(source.to_string()),
                location,
            },
            other => ApiError::Internal {
                message: other.to_string(),
                error: None,
                location,
            },
        }
    }
}

/// Convert image ingestion errors to API errors
impl From<MediaError> for ApiError {
    #[track_caller]
    fn from(e: MediaError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            MediaError::ImageCount { expected, .. } => ApiError::Validation {
                message: format!("Exactly {} images must be uploaded", expected),
                field: Some("images".to_string()),
                location,
            },
            MediaError::NoImages { .. } => ApiError::Validation {
                message: "No images uploaded".to_string(),
                field: Some("images".to_string()),
                location,
            },
            MediaError::TooManyImages { max, .. } => ApiError::Validation {
                message: format!("At most {} images may be uploaded", max),
                field: Some("images".to_string()),
                location,
            },
            other => {
                log::error!("Image host error: {}", other);
                ApiError::Upload {
                    message: "Upload failed".to_string(),
                    error: Some(other.client_detail()),
                    location,
                }
            }
        }
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Authentication failed ({}): {}", e.error_code(), e);
        ApiError::Unauthorized {
            message: e.client_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::rejected(e.status(), format!("Invalid request body: {}", e.body_text()))
    }
}

/// Convert multipart extraction rejections to API errors
impl From<MultipartRejection> for ApiError {
    #[track_caller]
    fn from(e: MultipartRejection) -> Self {
        ApiError::rejected(e.status(), format!("Expected a multipart form: {}", e.body_text()))
    }
}

/// Convert multipart stream errors to API errors
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::rejected(e.status(), format!("Invalid multipart form: {}", e.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
