use crate::{Identity, Locale};

#[test]
fn given_no_display_name_when_display_label_then_generic_title() {
    let identity = Identity::new("uid-1", Some("ana@x.com".into()));

    assert_eq!(identity.display_label(Locale::Es), "Administrador");
    assert_eq!(identity.display_label(Locale::En), "Administrator");
}

#[test]
fn given_display_name_when_display_label_then_uses_name() {
    let mut identity = Identity::new("uid-1", None);
    identity.display_name = Some("Ana".into());

    assert_eq!(identity.display_label(Locale::Es), "Ana");
}

#[test]
fn given_email_when_avatar_initial_then_uppercase_first_letter() {
    let identity = Identity::new("uid-1", Some("ana@x.com".into()));
    assert_eq!(identity.avatar_initial(), Some('A'));
}

#[test]
fn given_no_email_when_avatar_initial_then_none() {
    let identity = Identity::new("uid-1", None);
    assert_eq!(identity.avatar_initial(), None);
}

#[test]
fn given_minimal_json_when_deserialize_then_optional_fields_none() {
    let identity: Identity = serde_json::from_str(r#"{"uid":"abc"}"#).unwrap();

    assert_eq!(identity.uid, "abc");
    assert!(identity.email.is_none());
    assert!(identity.photo_url.is_none());
}
