use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - CORS
// =========================================================================

#[test]
#[serial]
fn given_default_origin_when_building_header_then_matches() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let header = config.cors.origin_header().unwrap();

    // Then
    assert_that!(header.to_str().unwrap(), eq("http://localhost:5173"));
}

#[test]
#[serial]
fn given_origin_without_scheme_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _origin = EnvGuard::set("DASH_CORS_ALLOWED_ORIGIN", "localhost:5173");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("cors.allowed_origin"));
}

#[test]
#[serial]
fn given_origin_with_trailing_slash_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _origin = EnvGuard::set("DASH_CORS_ALLOWED_ORIGIN", "https://admin.example.com/");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_https_origin_when_validate_then_ok() {
    // Given
    let _env = setup_config_dir();
    let _origin = EnvGuard::set("DASH_CORS_ALLOWED_ORIGIN", "https://admin.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}
