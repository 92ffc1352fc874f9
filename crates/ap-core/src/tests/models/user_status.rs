use crate::{Locale, UserStatus};

use std::str::FromStr;

#[test]
fn test_user_status_from_str() {
    assert_eq!(UserStatus::from_str("active").unwrap(), UserStatus::Active);
    assert_eq!(
        UserStatus::from_str("inactive").unwrap(),
        UserStatus::Inactive
    );
    assert!(UserStatus::from_str("deleted").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}

#[test]
fn test_user_status_labels() {
    assert_eq!(UserStatus::Active.label(Locale::Es), "Activo");
    assert_eq!(UserStatus::Inactive.label(Locale::Es), "Inactivo");
    assert_eq!(UserStatus::Inactive.label(Locale::En), "Inactive");
}
