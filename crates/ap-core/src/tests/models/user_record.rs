use crate::{Role, UserRecord, UserStatus};

use chrono::{TimeZone, Utc};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn given_full_document_when_from_document_then_all_fields_decoded() {
    let fields = object(json!({
        "name": "Ana",
        "email": "ana@x.com",
        "role": "admin",
        "status": "inactive",
        "createdAt": "2024-01-01T10:30:00.000Z",
        "updatedAt": "2024-01-02T10:30:00.000Z"
    }));

    let record = UserRecord::from_document("u1", &fields);

    assert_eq!(record.id, "u1");
    assert_eq!(record.name.as_deref(), Some("Ana"));
    assert_eq!(record.email, "ana@x.com");
    assert_eq!(record.role, Role::Admin);
    assert_eq!(record.status, UserStatus::Inactive);
    assert_eq!(
        record.created_at,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap())
    );
}

#[test]
fn given_sparse_document_when_from_document_then_defaults_applied() {
    let fields = object(json!({ "email": "bob@x.com" }));

    let record = UserRecord::from_document("u2", &fields);

    assert!(record.name.is_none());
    assert_eq!(record.role, Role::User);
    assert_eq!(record.status, UserStatus::Active);
    assert!(record.created_at.is_none());
    assert!(record.updated_at.is_none());
}

#[test]
fn given_unknown_role_and_bad_timestamp_when_from_document_then_lenient() {
    let fields = object(json!({
        "email": "eve@x.com",
        "role": "superuser",
        "createdAt": "yesterday"
    }));

    let record = UserRecord::from_document("u3", &fields);

    assert_eq!(record.role, Role::User);
    assert!(record.created_at.is_none());
}

#[test]
fn given_record_without_name_when_fields_then_empty_name() {
    let fields = object(json!({ "email": "bob@x.com", "role": "admin" }));
    let record = UserRecord::from_document("u2", &fields);

    let form = record.fields();

    assert_eq!(form.name, "");
    assert_eq!(form.email, "bob@x.com");
    assert_eq!(form.role, Role::Admin);
}
