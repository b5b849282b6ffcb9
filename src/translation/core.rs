/*!
 * Core translation service implementation.
 *
 * The service owns a provider and a bounded retry policy. A batch request is
 * retried with a fixed backoff delay until it succeeds or the attempt budget
 * is exhausted, at which point the whole document's translation is reported
 * unavailable. Partial results are never accepted: an empty response to a
 * non-empty batch counts as a failed attempt, not as zero sentences.
 */

use log::warn;
use std::time::Duration;

use crate::errors::TranslationError;
use crate::providers::Provider;

/// Bounded retry-with-backoff policy for translation requests
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up
    pub max_attempts: u32,
    /// Delay between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_secs(15),
        }
    }
}

impl RetryPolicy {
    /// Create a policy from config values
    pub fn new(max_attempts: u32, backoff_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Duration::from_millis(backoff_ms),
        }
    }
}

/// Translation service wrapping a provider with retry handling
pub struct TranslationService {
    /// The provider performing the actual translation
    provider: Box<dyn Provider>,
    /// Retry policy applied around every batch request
    retry: RetryPolicy,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(provider: Box<dyn Provider>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Check that the provider is reachable
    pub async fn test_connection(&self) -> Result<(), TranslationError> {
        self.provider
            .test_connection()
            .await
            .map_err(TranslationError::Provider)
    }

    /// Translate a sentence batch, retrying within the policy budget.
    ///
    /// An empty input batch short-circuits to an empty output without
    /// touching the provider.
    pub async fn translate_batch(
        &self,
        sentences: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>, TranslationError> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self
                .provider
                .translate_batch(sentences, source_language, target_language)
                .await
            {
                Ok(translated) if translated.is_empty() => {
                    warn!(
                        "{} returned an empty result for {} sentences (attempt {}/{})",
                        self.provider.name(),
                        sentences.len(),
                        attempt,
                        self.retry.max_attempts
                    );
                }
                Ok(translated) => return Ok(translated),
                Err(e) => {
                    warn!(
                        "{} batch translation failed (attempt {}/{}): {}",
                        self.provider.name(),
                        attempt,
                        self.retry.max_attempts,
                        e
                    );
                }
            }

            if attempt >= self.retry.max_attempts {
                return Err(TranslationError::Unavailable { attempts: attempt });
            }
            tokio::time::sleep(self.retry.backoff).await;
        }
    }
}
