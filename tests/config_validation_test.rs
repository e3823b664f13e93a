//! Configuration validation tests
//!
//! Tests that verify configuration structure, validation, and credential
//! redaction.

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use mackerel_plugin_hitachi_drive::config::{ArrayConfig, Config};
use mackerel_plugin_hitachi_drive::error::PluginError;

/// Helper to build a config with the given host
fn config_with_host(host: &str) -> Config {
    Config {
        array: ArrayConfig {
            host: host.to_string(),
            user_id: "maintenance".to_string(),
            password: SecretString::from("raid-password"),
        },
        tempfile: None,
    }
}

#[test]
fn test_valid_config_passes_validation() {
    // Given: A config with host, user and password set
    let config = config_with_host("192.0.2.10:23450");

    // When: Validating
    let result = config.validate();

    // Then: Validation should pass
    assert!(result.is_ok());
}

#[test]
fn test_empty_host_fails_validation() {
    // Given: A config with an empty host
    let config = config_with_host("");

    // When: Validating
    let result = config.validate();

    // Then: Validation should fail with a configuration error naming the host
    match result {
        Err(PluginError::Config(message)) => assert!(message.contains("host")),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_whitespace_host_fails_validation() {
    // Given: A config whose host is only whitespace
    let config = config_with_host("   ");

    // When: Validating
    let result = config.validate();

    // Then: Validation should fail the same way as for an empty host
    assert!(matches!(result, Err(PluginError::Config(_))));
}

#[test]
fn test_tempfile_path_is_carried() {
    // Given: A config with the agent's state file path
    let mut config = config_with_host("array.example.com");
    config.tempfile = Some(PathBuf::from("/tmp/mackerel-plugin-hitachi-drive"));

    // Then: The path is available, and validation is unaffected
    assert!(config.validate().is_ok());
    assert_eq!(
        config.tempfile.as_deref(),
        Some(std::path::Path::new("/tmp/mackerel-plugin-hitachi-drive"))
    );
}

#[test]
fn test_password_never_appears_in_debug_output() {
    // Given: A config holding a secret password
    let config = config_with_host("array.example.com");

    // When: Formatting the config with {:?}
    let debug = format!("{:?}", config);

    // Then: The password must be redacted, but remains readable on demand
    assert!(!debug.contains("raid-password"));
    assert_eq!(config.array.password.expose_secret(), "raid-password");
}
