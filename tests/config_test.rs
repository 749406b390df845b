//! Integration tests for Settings layered loading.
//!
//! These tests run without TREEGEN_* variables set and assume no global
//! config file, so they exercise defaults plus the local file layer.

use std::fs;

use tempfile::TempDir;

use treegen::application::ApplicationError;
use treegen::config::{local_config_path, Settings};
use treegen::domain::{Charset, DomainError, RenderConfig};

#[test]
fn given_no_local_config_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.render_config().unwrap(), RenderConfig::default());
}

#[test]
fn given_local_config_when_load_then_overrides_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "charset = \"ascii\"\nroot_dot = false\n",
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.charset, "ascii");
    assert!(!settings.root_dot);
    assert!(!settings.trailing_slash);
    assert!(!settings.full_path);
    let config = settings.render_config().unwrap();
    assert_eq!(config.charset, Charset::Ascii);
}

#[test]
fn given_malformed_local_config_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "root_dot = \"maybe\"\n").unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_unknown_charset_in_local_config_when_converting_then_rejects() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "charset = \"latin1\"\n").unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(
        settings.render_config(),
        Err(DomainError::UnknownCharset("latin1".into()))
    );
}
