use crate::{ApiError, ProjectInput};

use sc_config::ValidationConfig;
use sc_core::{Contributors, Uploader};

use serde_json::json;

fn input(title: &str, description: &str, contributors: usize) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        description: description.to_string(),
        external_link: None,
        contributors: Contributors(vec![json!({}); contributors]),
    }
}

fn limits() -> ValidationConfig {
    ValidationConfig {
        max_title_length: 5,
        max_description_length: 10,
        max_contributors: 2,
    }
}

fn rejected_field(result: crate::ApiResult<()>) -> Option<String> {
    match result {
        Err(ApiError::Validation { field, .. }) => field,
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_input_within_limits_is_valid() {
    assert!(input("Title", "0123456789", 2).validate(&limits()).is_ok());
}

#[test]
fn test_empty_fields_are_valid() {
    assert!(input("", "", 0).validate(&limits()).is_ok());
}

#[test]
fn test_title_length_counts_characters() {
    // Five characters, eleven bytes
    assert!(input("éééé√", "", 0).validate(&limits()).is_ok());
    assert_eq!(
        rejected_field(input("Titles", "", 0).validate(&limits())).as_deref(),
        Some("title")
    );
}

#[test]
fn test_overlong_description_is_rejected() {
    assert_eq!(
        rejected_field(input("T", "01234567890", 0).validate(&limits())).as_deref(),
        Some("description")
    );
}

#[test]
fn test_too_many_contributors_is_rejected() {
    assert_eq!(
        rejected_field(input("T", "", 3).validate(&limits())).as_deref(),
        Some("contributors")
    );
}

#[test]
fn test_into_new_project_carries_images_and_uploader() {
    let project = input("T", "D", 1).into_new_project(
        vec!["a".to_string(), "b".to_string()],
        Uploader::account("user-1"),
    );

    assert_eq!(project.images, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(project.uploader.account_id(), Some("user-1"));
    assert_eq!(project.contributors.len(), 1);
}
