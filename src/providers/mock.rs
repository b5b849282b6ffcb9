/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with tagged translations
 * - `MockProvider::intermittent(n)` - Fails the first n calls, then succeeds
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::truncated()` - Returns one translation too few
 * - `MockProvider::empty()` - Returns an empty list
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a tagged translation per sentence
    Working,
    /// Fails the first N calls, then succeeds
    Intermittent {
        /// Number of leading calls that fail
        fail_first: usize,
    },
    /// Always fails with an error
    Failing,
    /// Returns one translation fewer than requested (arity violation)
    Truncated,
    /// Returns an empty list regardless of input
    Empty,
    /// Succeeds after a delay (for timeout testing)
    Slow {
        /// Delay in milliseconds before responding
        delay_ms: u64,
    },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate_batch calls made
    call_count: Arc<AtomicUsize>,
    /// Custom per-sentence response generator (optional)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that fails the first `fail_first` calls
    pub fn intermittent(fail_first: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_first })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns one translation too few
    pub fn truncated() -> Self {
        Self::new(MockBehavior::Truncated)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator taking (sentence, target_language)
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Shared handle to the call counter, for asserting invocation counts
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }

    fn render(&self, sentence: &str, target_language: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(sentence, target_language),
            None => format!("[{}] {}", target_language, sentence),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate_batch(
        &self,
        sentences: &[String],
        _source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>, ProviderError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(sentences
                .iter()
                .map(|s| self.render(s, target_language))
                .collect()),
            MockBehavior::Intermittent { fail_first } => {
                if call < fail_first {
                    Err(ProviderError::RequestFailed(format!(
                        "simulated failure on call {}",
                        call + 1
                    )))
                } else {
                    Ok(sentences
                        .iter()
                        .map(|s| self.render(s, target_language))
                        .collect())
                }
            }
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "simulated permanent failure".to_string(),
            )),
            MockBehavior::Truncated => Ok(sentences
                .iter()
                .take(sentences.len().saturating_sub(1))
                .map(|s| self.render(s, target_language))
                .collect()),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                Ok(sentences
                    .iter()
                    .map(|s| self.render(s, target_language))
                    .collect())
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
