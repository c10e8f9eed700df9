/*!
 * Tests for application configuration functionality
 */

use docintel::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.max_sentences, 5);
    assert_eq!(config.max_keywords, 15);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Zero summary length is rejected
    config.max_sentences = 0;
    assert!(config.validate().is_err());

    // Restore and break the keyword limit instead
    config.max_sentences = 5;
    config.max_keywords = 0;
    assert!(config.validate().is_err());
}

/// Test that missing fields fall back to serde defaults
#[test]
fn test_config_deserialization_withEmptyJson_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").expect("empty object should parse");

    assert_eq!(config.max_sentences, 5);
    assert_eq!(config.max_keywords, 15);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that explicit fields override the defaults
#[test]
fn test_config_deserialization_withExplicitValues_shouldUseThem() {
    let json = r#"{ "max_sentences": 3, "max_keywords": 7, "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json).expect("config should parse");

    assert_eq!(config.max_sentences, 3);
    assert_eq!(config.max_keywords, 7);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test that a config round-trips through JSON unchanged
#[test]
fn test_config_serialization_withRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.max_sentences = 8;
    config.log_level = LogLevel::Warn;

    let json = serde_json::to_string(&config).expect("config should serialize");
    let parsed: Config = serde_json::from_str(&json).expect("config should parse back");

    assert_eq!(parsed.max_sentences, 8);
    assert_eq!(parsed.max_keywords, 15);
    assert_eq!(parsed.log_level, LogLevel::Warn);
}
