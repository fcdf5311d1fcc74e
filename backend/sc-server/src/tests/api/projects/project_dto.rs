use crate::ProjectDto;

use sc_core::{Contributors, ExpandedProject, NewProject, ProjectRecord, Uploader, UserProfile};

use serde_json::json;

fn record(uploader: Uploader) -> ProjectRecord {
    ProjectRecord::new(NewProject {
        title: "Weather Station".to_string(),
        description: "Arduino based".to_string(),
        external_link: Some("https://forms.example.com/x".to_string()),
        contributors: Contributors(vec![json!({ "name": "Ada" })]),
        images: vec!["urlA".to_string(), "urlB".to_string()],
        uploader,
    })
}

#[test]
fn test_dto_uses_camel_case_wire_names() {
    let dto = ProjectDto::from(record(Uploader::account("user-1")));
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["googleFormLink"], "https://forms.example.com/x");
    assert!(json["createdAt"].is_string());
    assert_eq!(json["contributors"], json!([{ "name": "Ada" }]));
    assert_eq!(json["uploader"], json!({ "kind": "account", "id": "user-1" }));
}

#[test]
fn test_expanded_dto_includes_profile() {
    let project = ExpandedProject {
        record: record(Uploader::account("user-1")),
        uploader_profile: Some(UserProfile {
            id: "user-1".to_string(),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
        }),
    };

    let json = serde_json::to_value(ProjectDto::from(project)).unwrap();

    assert_eq!(
        json["uploader"],
        json!({ "kind": "account", "id": "user-1", "name": "Ada", "email": "ada@example.com" })
    );
}

#[test]
fn test_expanded_dto_without_profile_shows_nulls() {
    let project = ExpandedProject {
        record: record(Uploader::account("ghost")),
        uploader_profile: None,
    };

    let json = serde_json::to_value(ProjectDto::from(project)).unwrap();

    assert_eq!(
        json["uploader"],
        json!({ "kind": "account", "id": "ghost", "name": null, "email": null })
    );
}

#[test]
fn test_submitted_uploader_serializes_form_identity() {
    let uploader = Uploader::Submitted {
        uploaded_by: Some("student-1".to_string()),
        name: Some("Sam".to_string()),
        email: None,
    };

    let json = serde_json::to_value(ProjectDto::from(record(uploader))).unwrap();

    assert_eq!(
        json["uploader"],
        json!({ "kind": "submitted", "uploadedBy": "student-1", "name": "Sam", "email": null })
    );
}
