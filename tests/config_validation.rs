//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use net_ip::config::{AddressConfig, DemoConfig, LoggingConfig};
use net_ip::AddressError;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = AddressConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_empty_app_name() {
    let mut config = AddressConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_long_app_name() {
    let config = AddressConfig::default_with_overrides(|c| c.logging.app_name = "x".repeat(65));

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Application name too long")));
}

#[test]
fn test_json_with_ansi_rejected() {
    let logging = LoggingConfig {
        json_format: true,
        ansi: true,
        ..LoggingConfig::default()
    };

    let errors = logging.validate();
    assert!(errors.iter().any(|e| e.contains("ANSI colours")));
}

#[test]
fn test_invalid_v4_input() {
    let mut config = AddressConfig::default();
    config.demo.v4_address = "300.1.1.1".to_string();

    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Invalid v4_address"));
    assert!(errors[0].contains("invalid IPv4 address syntax"));
}

#[test]
fn test_native_input_must_not_embed_v4() {
    let demo = DemoConfig {
        native_v6_address: "::ffff:1.2.3.4".to_string(),
        ..DemoConfig::default()
    };

    let errors = demo.validate();
    assert!(errors.iter().any(|e| e.contains("embeds an IPv4 address")));
}

#[test]
fn test_embedded_input_must_embed_v4() {
    let demo = DemoConfig {
        embedded_v6_address: "2001:db8::1".to_string(),
        ..DemoConfig::default()
    };

    let errors = demo.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("does not embed an IPv4 address")));
}

#[test]
fn test_malformed_v6_inputs() {
    let demo = DemoConfig {
        v4_address: "10.0.0.1".to_string(),
        native_v6_address: "1::2::3".to_string(),
        embedded_v6_address: "::1.2.3".to_string(),
    };

    let errors = demo.validate();
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors.iter().all(|e| e.contains("invalid IPv6 address syntax")));
}

#[test]
fn test_validate_strict_collects_all_errors() {
    let config = AddressConfig::default_with_overrides(|c| {
        c.logging.app_name.clear();
        c.demo.v4_address = "nope".to_string();
    });

    match config.validate_strict() {
        Err(AddressError::ConfigError(msg)) => {
            assert!(msg.contains("Configuration validation failed"));
            assert!(msg.contains("cannot be empty"));
            assert!(msg.contains("Invalid v4_address"));
        }
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_toml_roundtrip() {
    let text = AddressConfig::example_config();
    let config = AddressConfig::from_toml(&text).expect("example config parses");
    assert_eq!(config.logging.log_level, Level::INFO);
    assert_eq!(config.demo.v4_address, "192.168.0.1");
}

#[test]
fn test_toml_partial_sections_use_defaults() {
    let config = AddressConfig::from_toml(
        r#"
        [logging]
        app_name = "walkthrough"
        log_level = "debug"
        json_format = true
        ansi = false
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.logging.app_name, "walkthrough");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert_eq!(config.demo.embedded_v6_address, "::192.168.0.1");
    assert!(config.validate().is_empty());
}

#[test]
fn test_toml_invalid_log_level() {
    let result = AddressConfig::from_toml(
        r#"
        [logging]
        app_name = "walkthrough"
        log_level = "loud"
        json_format = false
        ansi = true
        "#,
    );

    match result {
        Err(AddressError::ConfigError(msg)) => assert!(msg.contains("Failed to parse TOML")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join(format!("net-ip-config-{}.toml", std::process::id()));
    let config = AddressConfig::default_with_overrides(|c| {
        c.demo.native_v6_address = "fe80::1".to_string();
    });

    config.save_to_file(&path).expect("save config");
    let loaded = AddressConfig::from_file(&path).expect("load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.demo.native_v6_address, "fe80::1");
    assert!(loaded.validate().is_empty());
}

#[test]
fn test_missing_file() {
    let result = AddressConfig::from_file("/nonexistent/net-ip.toml");
    assert!(matches!(
        result,
        Err(AddressError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound
    ));

    let result = AddressConfig::default().save_to_file("/nonexistent/dir/net-ip.toml");
    assert!(matches!(result, Err(AddressError::Io(_))));
}

#[test]
fn test_env_overrides() {
    std::env::set_var("NET_IP_LOG_LEVEL", "warn");
    std::env::set_var("NET_IP_LOG_JSON", "true");
    std::env::set_var("NET_IP_APP_NAME", "from-env");
    let config = AddressConfig::from_env();

    std::env::set_var("NET_IP_LOG_JSON", "maybe");
    let invalid = AddressConfig::from_env();

    std::env::remove_var("NET_IP_LOG_LEVEL");
    std::env::remove_var("NET_IP_LOG_JSON");
    std::env::remove_var("NET_IP_APP_NAME");

    let config = config.expect("valid overrides");
    assert_eq!(config.logging.log_level, Level::WARN);
    assert!(config.logging.json_format);
    assert!(!config.logging.ansi);
    assert_eq!(config.logging.app_name, "from-env");
    assert!(config.validate().is_empty());
    assert!(matches!(invalid, Err(AddressError::ConfigError(_))));
}
