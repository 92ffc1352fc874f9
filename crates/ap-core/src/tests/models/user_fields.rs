use crate::{Role, UserFields, UserStatus, field};

use chrono::{TimeZone, Utc};

fn ana() -> UserFields {
    UserFields {
        name: "Ana".into(),
        email: "ana@x.com".into(),
        role: Role::Admin,
        status: UserStatus::Active,
    }
}

#[test]
fn given_default_fields_then_user_and_active() {
    let fields = UserFields::default();

    assert_eq!(fields.name, "");
    assert_eq!(fields.role, Role::User);
    assert_eq!(fields.status, UserStatus::Active);
}

#[test]
fn given_blank_email_when_validate_then_error() {
    let fields = UserFields {
        email: "   ".into(),
        ..ana()
    };
    assert!(fields.validate().is_err());
}

#[test]
fn given_blank_name_when_validate_then_error() {
    let fields = UserFields {
        name: "  ".into(),
        ..ana()
    };
    assert!(fields.validate().is_err());
}

#[test]
fn given_name_and_email_when_validate_then_ok() {
    assert!(ana().validate().is_ok());
}

#[test]
fn given_fields_when_create_payload_then_both_timestamps_equal() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();

    let payload = ana().to_create_payload(now);

    assert_eq!(payload[field::NAME], "Ana");
    assert_eq!(payload[field::ROLE], "admin");
    assert_eq!(payload[field::STATUS], "active");
    assert_eq!(payload[field::CREATED_AT], "2024-01-01T10:30:00.000Z");
    assert_eq!(payload[field::CREATED_AT], payload[field::UPDATED_AT]);
}

#[test]
fn given_fields_when_update_payload_then_created_at_absent() {
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let payload = ana().to_update_payload(now);

    assert!(!payload.contains_key(field::CREATED_AT));
    assert_eq!(payload[field::UPDATED_AT], "2024-01-02T00:00:00.000Z");
}
