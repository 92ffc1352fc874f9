use crate::{Locale, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("root").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn test_role_labels() {
    assert_eq!(Role::Admin.label(Locale::Es), "Administrador");
    assert_eq!(Role::User.label(Locale::Es), "Usuario");
    assert_eq!(Role::Admin.label(Locale::En), "Administrator");
}
