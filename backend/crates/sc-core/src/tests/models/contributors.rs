use crate::{Contributors, ContributorsField, CoreError};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_encoded_array_when_decoded_then_matches_original_structure() {
    // Given
    let original = Contributors(vec![
        json!({"name": "Ada", "role": "lead"}),
        json!({"name": "Linus", "links": ["https://example.com"]}),
    ]);
    let encoded = original.encode().unwrap();

    // When
    let decoded = Contributors::decode(&encoded).unwrap();

    // Then
    assert_that!(decoded, eq(&original));
}

#[test]
fn given_empty_array_text_when_decoded_then_empty() {
    let decoded = Contributors::decode("[]").unwrap();

    assert_that!(decoded.is_empty(), eq(true));
}

#[test]
fn given_blank_text_when_decoded_then_empty() {
    let decoded = Contributors::decode("   ").unwrap();

    assert_that!(decoded.len(), eq(0));
}

#[test]
fn given_malformed_text_when_decoded_then_decode_error() {
    let result = Contributors::decode("[{\"name\": ");

    assert!(matches!(result, Err(CoreError::ContributorDecode { .. })));
}

#[test]
fn given_non_array_json_when_decoded_then_decode_error() {
    let result = Contributors::decode("{\"name\": \"Ada\"}");

    assert!(matches!(result, Err(CoreError::ContributorDecode { .. })));
}

#[test]
fn given_absent_field_when_normalised_then_empty() {
    let contributors = Contributors::from_field(None).unwrap();

    assert_that!(contributors, eq(&Contributors::default()));
}

#[test]
fn given_structured_field_when_normalised_then_kept_verbatim() {
    let field = ContributorsField::List(vec![json!("Ada"), json!("Grace")]);

    let contributors = Contributors::from_field(Some(field)).unwrap();

    assert_that!(contributors.0, eq(&vec![json!("Ada"), json!("Grace")]));
}

#[test]
fn given_request_json_when_deserialized_then_both_field_shapes_accepted() {
    let encoded: ContributorsField = serde_json::from_value(json!("[\"Ada\"]")).unwrap();
    let listed: ContributorsField = serde_json::from_value(json!(["Ada"])).unwrap();

    assert_that!(
        Contributors::from_field(Some(encoded)).unwrap(),
        eq(&Contributors::from_field(Some(listed)).unwrap())
    );
}
