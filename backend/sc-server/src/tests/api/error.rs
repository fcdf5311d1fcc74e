use crate::ApiError;

use sc_core::Contributors;
use sc_media::{ImageIngestion, MediaError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn response_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::not_found("Project not found");

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Project not found");
    assert!(json.get("error").is_none());
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Title too long", Some("title"));

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "title");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = response_json(ApiError::forbidden("nope")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_upload_error_returns_500_with_detail() {
    let error = ApiError::Upload {
        message: "Upload failed".into(),
        error: Some("host timed out".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPLOAD_ERROR");
    assert_eq!(json["error"], "host timed out");
}

#[tokio::test]
async fn test_contributor_decode_error_maps_to_decode_error() {
    let core_error = Contributors::decode("{\"not\":\"an array\"}").unwrap_err();

    let (status, json) = response_json(core_error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DECODE_ERROR");
    assert!(json["error"].is_string());
}

#[test]
fn test_image_count_error_converts_to_validation() {
    let media_error = ImageIngestion::pass_through(vec!["one".to_string()]).unwrap_err();
    let api_err: ApiError = media_error.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Exactly 2 images must be uploaded");
            assert_eq!(field.as_deref(), Some("images"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_host_failure_converts_to_upload_error() {
    let api_err: ApiError = MediaError::upload("503 from host").into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api_err.code(), "UPLOAD_ERROR");
}

#[test]
fn test_auth_error_converts_to_unauthorized() {
    let auth_error = sc_auth::bearer_token(None).unwrap_err();
    let api_err: ApiError = auth_error.into();

    assert_eq!(api_err.status(), StatusCode::UNAUTHORIZED);
    match api_err {
        ApiError::Unauthorized { message, .. } => {
            assert_eq!(message, "Authentication required");
        }
        _ => panic!("Expected Unauthorized error"),
    }
}
