//! Tests for selector config parsing

use super::SelectorConfig;
use crate::errors::SelectorError;

#[test]
fn test_embedded_defaults_are_legacy() {
    let config = SelectorConfig::default();
    assert!(!config.clamp_negative);
    assert!(!config.validate_inputs);
    assert_eq!(config.default_zoom, 1.0);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = SelectorConfig::from_str("[selector]\nclamp_negative = true\n").unwrap();
    assert!(config.clamp_negative);
    assert!(!config.validate_inputs);
    assert_eq!(config.default_zoom, 1.0);
}

#[test]
fn test_integer_zoom_is_accepted() {
    let config = SelectorConfig::from_str("[selector]\ndefault_zoom = 2\n").unwrap();
    assert_eq!(config.default_zoom, 2.0);
}

#[test]
fn test_missing_section_is_default() {
    let config = SelectorConfig::from_str("# nothing here\n").unwrap();
    assert_eq!(config, SelectorConfig::default());
}

#[test]
fn test_rejects_bad_values() {
    match SelectorConfig::from_str("[selector]\nvalidate_inputs = \"yes\"\n") {
        Err(SelectorError::ConfigError(msg)) => assert!(msg.contains("validate_inputs")),
        other => panic!("unexpected result: {:?}", other),
    }

    match SelectorConfig::from_str("[selector]\ndefault_zoom = 0.0\n") {
        Err(SelectorError::InvalidZoom(z)) => assert_eq!(z, 0.0),
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(SelectorConfig::from_str("[selector\n").is_err());
    assert!(SelectorConfig::from_str("selector = 3\n").is_err());
}
