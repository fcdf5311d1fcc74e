use crate::{CoreError, Uploader};

use serde_json::json;

#[test]
fn test_account_uploader_serializes_with_kind_tag() {
    let value = serde_json::to_value(Uploader::account("user-1")).unwrap();

    assert_eq!(value, json!({"kind": "account", "id": "user-1"}));
}

#[test]
fn test_submitted_uploader_serializes_camel_case() {
    let uploader = Uploader::Submitted {
        uploaded_by: Some("student-7".to_string()),
        name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
    };

    let value = serde_json::to_value(uploader).unwrap();

    assert_eq!(
        value,
        json!({
            "kind": "submitted",
            "uploadedBy": "student-7",
            "name": "Ada",
            "email": "ada@example.com"
        })
    );
}

#[test]
fn test_from_columns_rebuilds_both_variants() {
    let account =
        Uploader::from_columns("account", Some("user-1".to_string()), None, None, None).unwrap();
    let submitted =
        Uploader::from_columns("submitted", None, None, Some("Ada".to_string()), None).unwrap();

    assert_eq!(account, Uploader::account("user-1"));
    assert_eq!(submitted.kind(), "submitted");
    assert_eq!(submitted.account_id(), None);
}

#[test]
fn test_from_columns_rejects_unknown_kind() {
    let result = Uploader::from_columns("robot", None, None, None, None);

    assert!(matches!(
        result,
        Err(CoreError::InvalidUploaderKind { value, .. }) if value == "robot"
    ));
}
