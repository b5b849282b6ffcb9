/*!
 * Caiyun translation API client.
 *
 * Speaks the Caiyun batch endpoint: a JSON POST carrying the sentence list
 * and a `<src>2<tgt>` direction tag, authenticated with a token header. The
 * response carries one translation per input sentence, in order.
 */

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Caiyun API client
#[derive(Debug)]
pub struct Caiyun {
    /// Endpoint URL of the translator API
    endpoint: String,
    /// API token sent in the x-authorization header
    token: String,
    /// Request identifier echoed to the API
    request_id: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request for the Caiyun API
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Sentences to translate, in order
    source: &'a [String],
    /// Direction tag, e.g. "en2zh"
    trans_type: String,
    /// Caller-chosen request identifier
    request_id: &'a str,
    /// Whether the API should detect the source language
    detect: bool,
}

/// Translation response from the Caiyun API
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// Translations, one per source sentence, same order
    target: Vec<String>,
}

impl Caiyun {
    /// Create a new Caiyun client.
    ///
    /// # Arguments
    /// * `endpoint` - Translator API URL
    /// * `token` - API token
    /// * `request_id` - Request identifier to send with every call
    /// * `timeout_secs` - Per-request timeout in seconds
    pub fn new(
        endpoint: &str,
        token: &str,
        request_id: &str,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        Url::parse(endpoint).map_err(|e| {
            ProviderError::ConnectionError(format!("invalid endpoint URL '{}': {}", endpoint, e))
        })?;

        if token.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Caiyun API token is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            request_id: request_id.to_string(),
            client,
        })
    }

    /// Build the direction tag the API expects, e.g. "en2zh"
    fn direction_tag(source_language: &str, target_language: &str) -> String {
        format!("{}2{}", source_language, target_language)
    }
}

#[async_trait]
impl Provider for Caiyun {
    async fn translate_batch(
        &self,
        sentences: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>, ProviderError> {
        let request = TranslateRequest {
            source: sentences,
            trans_type: Self::direction_tag(source_language, target_language),
            request_id: &self.request_id,
            detect: true,
        };

        debug!(
            "Sending {} sentences to Caiyun ({})",
            sentences.len(),
            request.trans_type
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .header("x-authorization", format!("token {}", self.token))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ProviderError::AuthenticationError(format!(
                "Caiyun rejected the API token (status {})",
                status.as_u16()
            )));
        }
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded(
                "Caiyun rate limit hit".to_string(),
            ));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.target)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // The API has no health endpoint; probe it with a one-word batch
        let probe = vec!["hello".to_string()];
        self.translate_batch(&probe, "en", "zh").await.map(|_| ())
    }

    fn name(&self) -> &str {
        "Caiyun"
    }
}
