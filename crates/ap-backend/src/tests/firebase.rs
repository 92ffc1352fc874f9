use crate::firebase::client::{
    auth_error, document_id, document_segment, field_path, firestore_error,
};
use crate::firebase::firestore_value::{decode, decode_fields, encode, encode_fields};
use crate::error_codes;

use reqwest::StatusCode;
use serde_json::{Value, json};

// =========================================================================
// Firestore value codec
// =========================================================================

#[test]
fn given_plain_fields_when_encode_then_typed_values() {
    let fields = json!({
        "name": "Ana",
        "age": 31,
        "score": 4.5,
        "verified": true,
        "nickname": null
    });

    let encoded = encode_fields(fields.as_object().unwrap());

    assert_eq!(encoded["name"], json!({ "stringValue": "Ana" }));
    assert_eq!(encoded["age"], json!({ "integerValue": "31" }));
    assert_eq!(encoded["score"], json!({ "doubleValue": 4.5 }));
    assert_eq!(encoded["verified"], json!({ "booleanValue": true }));
    assert_eq!(encoded["nickname"], json!({ "nullValue": null }));
}

#[test]
fn given_nested_value_when_encode_then_map_and_array_wrappers() {
    let encoded = encode(&json!({ "tags": ["a"] }));

    assert_eq!(
        encoded,
        json!({
            "mapValue": { "fields": {
                "tags": { "arrayValue": { "values": [ { "stringValue": "a" } ] } }
            } }
        })
    );
}

#[test]
fn given_firestore_document_fields_when_decode_then_plain_json() {
    let raw = json!({
        "name": { "stringValue": "Ana" },
        "createdAt": { "stringValue": "2024-01-01T00:00:00.000Z" },
        "logins": { "integerValue": "12" },
        "seenAt": { "timestampValue": "2024-02-01T00:00:00Z" },
        "empty": { "arrayValue": {} },
        "meta": { "mapValue": {} }
    });

    let decoded = decode_fields(raw.as_object().unwrap()).unwrap();

    assert_eq!(decoded["name"], "Ana");
    assert_eq!(decoded["createdAt"], "2024-01-01T00:00:00.000Z");
    assert_eq!(decoded["logins"], json!(12));
    assert_eq!(decoded["seenAt"], "2024-02-01T00:00:00Z");
    assert_eq!(decoded["empty"], json!([]));
    assert_eq!(decoded["meta"], json!({}));
}

#[test]
fn given_untyped_value_when_decode_then_error() {
    assert!(decode(&json!("bare string")).is_err());
    assert!(decode(&json!({ "weirdValue": 1 })).is_err());
    assert!(decode(&json!({ "integerValue": "twelve" })).is_err());
}

#[test]
fn given_null_value_when_decode_then_null() {
    assert_eq!(decode(&json!({ "nullValue": null })).unwrap(), Value::Null);
}

// =========================================================================
// Document names and field paths
// =========================================================================

#[test]
fn test_document_id_is_last_segment() {
    let name = "projects/demo/databases/(default)/documents/users/u1";
    assert_eq!(document_id(name).unwrap(), "u1");
}

#[test]
fn test_document_id_rejects_trailing_slash() {
    assert!(document_id("projects/demo/documents/users/").is_err());
}

#[test]
fn test_document_segment_accepts_plain_ids_only() {
    assert_eq!(document_segment("u1").unwrap(), "u1");
    assert_eq!(document_segment("a b?c").unwrap(), "a b?c");

    for id in ["", ".", "..", "../admins/root", "u1/sub"] {
        let err = document_segment(id).unwrap_err();
        assert_eq!(err.code(), error_codes::INVALID_DOCUMENT_ID);
    }
}

#[test]
fn test_field_path_quotes_non_identifiers() {
    assert_eq!(field_path("updatedAt"), "updatedAt");
    assert_eq!(field_path("_private"), "_private");
    assert_eq!(field_path("first name"), "`first name`");
    assert_eq!(field_path("1st"), "`1st`");
}

// =========================================================================
// Error bodies
// =========================================================================

#[test]
fn given_identity_toolkit_error_body_when_auth_error_then_coded() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;

    let err = auth_error(StatusCode::BAD_REQUEST, body);

    assert_eq!(err.code(), error_codes::EMAIL_ALREADY_IN_USE);
}

#[test]
fn given_non_json_auth_failure_when_auth_error_then_internal_error() {
    let err = auth_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert_eq!(err.code(), error_codes::INTERNAL_ERROR);
}

#[test]
fn given_firestore_error_body_when_firestore_error_then_status_code() {
    let body = r#"{"error":{"code":404,"message":"No document to update","status":"NOT_FOUND"}}"#;

    let err = firestore_error(StatusCode::NOT_FOUND, body);

    assert_eq!(err.code(), "firestore/not-found");
}

#[test]
fn given_firestore_error_without_status_when_firestore_error_then_http_code() {
    let err = firestore_error(StatusCode::SERVICE_UNAVAILABLE, "");
    assert_eq!(err.code(), "firestore/http-503");
}
