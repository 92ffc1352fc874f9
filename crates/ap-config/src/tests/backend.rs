use crate::Config;
use crate::tests::{EnvGuard, VALID_BACKEND, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Backend
// =========================================================================

#[test]
#[serial]
fn given_no_api_key_when_validate_then_error_mentions_api_key() {
    // Given
    let _env = setup_config_dir();
    let _project = EnvGuard::set("AP_PROJECT_ID", "demo-project");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("api_key"));
}

#[test]
#[serial]
fn given_no_project_id_when_validate_then_error_mentions_project_id() {
    // Given
    let _env = setup_config_dir();
    let _key = EnvGuard::set("AP_API_KEY", "AIza-test-key");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("project_id"));
}

#[test]
#[serial]
fn given_non_http_auth_url_when_validate_then_error() {
    // Given
    let env = setup_config_dir();
    env.write_config(VALID_BACKEND);
    let _url = EnvGuard::set("AP_AUTH_URL", "ftp://identity.example");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("backend.auth_url"));
}

#[test]
#[serial]
fn given_local_emulator_urls_when_validate_then_ok() {
    // Given
    let env = setup_config_dir();
    env.write_config(VALID_BACKEND);
    let _auth = EnvGuard::set("AP_AUTH_URL", "http://127.0.0.1:9099");
    let _store = EnvGuard::set("AP_FIRESTORE_URL", "http://127.0.0.1:8080");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_database_id_with_slash_when_validate_then_error() {
    // Given
    let env = setup_config_dir();
    env.write_config(VALID_BACKEND);
    let _db = EnvGuard::set("AP_DATABASE_ID", "a/b");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
