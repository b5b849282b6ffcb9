use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::alignment::JoinPolicy;
use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO 639-1)
    pub source_language: String,

    /// Target language code (ISO 639-1)
    pub target_language: String,

    /// Translation config
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// Caiyun batch translation API
    #[default]
    Caiyun,
    /// In-process mock provider, for dry runs and tests
    Mock,
}

impl TranslationProvider {
    /// Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Caiyun => "Caiyun",
            Self::Mock => "Mock",
        }
    }

    /// Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Caiyun => "caiyun".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caiyun" => Ok(Self::Caiyun),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    /// API key / token
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Request identifier sent with every call
    #[serde(default = "default_request_id")]
    pub request_id: String,

    /// Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Provider config with defaults for the given provider
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::Caiyun => Self {
                provider_type: "caiyun".to_string(),
                api_key: String::new(),
                endpoint: default_caiyun_endpoint(),
                request_id: default_request_id(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::Mock => Self {
                provider_type: "mock".to_string(),
                api_key: String::new(),
                endpoint: String::new(),
                request_id: default_request_id(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Common translation settings shared by all providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationCommonConfig {
    /// Maximum number of attempts per batch request
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Delay between retry attempts in milliseconds
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// How translated sentences are joined into a paragraph
    #[serde(default)]
    pub join_policy: JoinPolicy,

    /// Maximum number of documents processed concurrently
    #[serde(default = "default_concurrent_documents")]
    pub concurrent_documents: usize,
}

impl Default for TranslationCommonConfig {
    fn default() -> Self {
        Self {
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            join_policy: JoinPolicy::default(),
            concurrent_documents: default_concurrent_documents(),
        }
    }
}

/// Translation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Selected provider
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Common settings
    #[serde(default)]
    pub common: TranslationCommonConfig,

    /// Configured providers
    #[serde(default = "default_available_providers")]
    pub available_providers: Vec<ProviderConfig>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            common: TranslationCommonConfig::default(),
            available_providers: default_available_providers(),
        }
    }
}

impl TranslationConfig {
    /// Config entry for the selected provider, if present
    pub fn selected_provider_config(&self) -> Option<&ProviderConfig> {
        let wanted = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == wanted)
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_request_id() -> String {
    "demo".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    5
}

fn default_retry_backoff_ms() -> u64 {
    15000
}

fn default_concurrent_documents() -> usize {
    4
}

fn default_caiyun_endpoint() -> String {
    "http://api.interpreter.caiyunai.com/v1/translator".to_string()
}

fn default_available_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(TranslationProvider::Caiyun),
        ProviderConfig::new(TranslationProvider::Mock),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_language: "zh".to_string(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)
            .with_context(|| "Invalid source language")?;
        language_utils::validate_language_code(&self.target_language)
            .with_context(|| "Invalid target language")?;

        if self.source_language == self.target_language {
            return Err(anyhow!(
                "Source and target language are both '{}'",
                self.source_language
            ));
        }

        if self.translation.common.retry_count == 0 {
            return Err(anyhow!("retry_count must be at least 1"));
        }

        if self.translation.selected_provider_config().is_none() {
            return Err(anyhow!(
                "No provider config entry for selected provider '{}'",
                self.translation.provider
            ));
        }

        Ok(())
    }
}
