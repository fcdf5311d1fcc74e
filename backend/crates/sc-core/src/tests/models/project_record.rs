use crate::{Contributors, NewProject, ProjectRecord, Uploader};

use chrono::Timelike;

fn new_project(uploader: Uploader) -> NewProject {
    NewProject {
        title: "Solar Car".to_string(),
        description: "A car that runs on sunlight".to_string(),
        external_link: Some("https://forms.example.com/solar".to_string()),
        contributors: Contributors::default(),
        images: vec!["urlA".to_string(), "urlB".to_string()],
        uploader,
    }
}

#[test]
fn test_project_new_assigns_id_and_keeps_fields() {
    let project = ProjectRecord::new(new_project(Uploader::account("user-1")));

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Solar Car");
    assert_eq!(project.images, vec!["urlA", "urlB"]);
    assert_eq!(project.created_at.nanosecond() % 1_000_000, 0);
}

#[test]
fn test_project_new_assigns_distinct_ids() {
    let a = ProjectRecord::new(new_project(Uploader::account("user-1")));
    let b = ProjectRecord::new(new_project(Uploader::account("user-1")));

    assert_ne!(a.id, b.id);
}

#[test]
fn test_is_uploaded_by_matches_account_id() {
    let project = ProjectRecord::new(new_project(Uploader::account("user-1")));

    assert!(project.is_uploaded_by("user-1"));
    assert!(!project.is_uploaded_by("user-2"));
}

#[test]
fn test_submitted_project_has_no_account_uploader() {
    let project = ProjectRecord::new(new_project(Uploader::Submitted {
        uploaded_by: Some("user-1".to_string()),
        name: Some("Ada".to_string()),
        email: None,
    }));

    assert!(!project.is_uploaded_by("user-1"));
}
