/*!
 * Tests for app configuration
 */

use std::str::FromStr;
use transwiki::alignment::JoinPolicy;
use transwiki::app_config::{Config, LogLevel, ProviderConfig, TranslationProvider};

use crate::common;

/// Test that the default configuration is valid
#[test]
fn test_default_config_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "zh");
    assert_eq!(config.translation.provider, TranslationProvider::Caiyun);
    assert_eq!(config.translation.common.retry_count, 5);
    assert_eq!(config.translation.common.join_policy, JoinPolicy::None);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test config save/load round trip
#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "fr".to_string();
    config.translation.common.retry_count = 2;
    config.translation.common.join_policy = JoinPolicy::Space;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.target_language, "fr");
    assert_eq!(loaded.translation.common.retry_count, 2);
    assert_eq!(loaded.translation.common.join_policy, JoinPolicy::Space);
}

/// Test that identical source and target languages are rejected
#[test]
fn test_validate_withSameLanguages_shouldFail() {
    let mut config = Config::default();
    config.target_language = "en".to_string();
    assert!(config.validate().is_err());
}

/// Test that an invalid language code is rejected
#[test]
fn test_validate_withBadLanguageCode_shouldFail() {
    let mut config = Config::default();
    config.source_language = "english".to_string();
    assert!(config.validate().is_err());
}

/// Test that a zero retry count is rejected
#[test]
fn test_validate_withZeroRetries_shouldFail() {
    let mut config = Config::default();
    config.translation.common.retry_count = 0;
    assert!(config.validate().is_err());
}

/// Test that a missing provider entry is rejected
#[test]
fn test_validate_withMissingProviderEntry_shouldFail() {
    let mut config = Config::default();
    config.translation.available_providers.clear();
    assert!(config.validate().is_err());
}

/// Test provider parsing from strings
#[test]
fn test_provider_fromStr_shouldParseKnownNames() {
    assert_eq!(
        TranslationProvider::from_str("caiyun").unwrap(),
        TranslationProvider::Caiyun
    );
    assert_eq!(
        TranslationProvider::from_str("MOCK").unwrap(),
        TranslationProvider::Mock
    );
    assert!(TranslationProvider::from_str("deepl").is_err());
}

/// Test provider config defaults
#[test]
fn test_provider_config_withCaiyun_shouldHaveDefaultEndpoint() {
    let provider_config = ProviderConfig::new(TranslationProvider::Caiyun);
    assert_eq!(provider_config.provider_type, "caiyun");
    assert!(provider_config.endpoint.contains("caiyunai.com"));
    assert_eq!(provider_config.request_id, "demo");
    assert_eq!(provider_config.timeout_secs, 30);
}

/// Test lookup of the selected provider's config entry
#[test]
fn test_selected_provider_config_shouldFindMatchingEntry() {
    let config = Config::default();
    let entry = config.translation.selected_provider_config().unwrap();
    assert_eq!(entry.provider_type, "caiyun");
}

/// Test that an unknown provider value fails to parse from JSON
#[test]
fn test_from_file_withUnknownProvider_shouldFail() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        &dir.path().to_path_buf(),
        "bad.json",
        r#"{
            "source_language": "en",
            "target_language": "zh",
            "translation": { "provider": "deepl" }
        }"#,
    )
    .unwrap();
    assert!(Config::from_file(&path).is_err());
}
