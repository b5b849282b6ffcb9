/*!
 * Provider implementations for translation services.
 *
 * This module contains client implementations for translation backends:
 * - Caiyun: HTTP batch translation API
 * - Mock: deterministic in-process provider for tests and dry runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers.
///
/// The contract the aligner depends on: the output list has the same length
/// and order as the input list, element `k` of the output being the
/// translation of element `k` of the input. No reordering or merging.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate an ordered batch of sentences.
    ///
    /// # Arguments
    /// * `sentences` - The sentences to translate, in order
    /// * `source_language` - ISO 639-1 source language code
    /// * `target_language` - ISO 639-1 target language code
    ///
    /// # Returns
    /// * `Result<Vec<String>, ProviderError>` - One translation per input
    ///   sentence, same order, or an error
    async fn translate_batch(
        &self,
        sentences: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<Vec<String>, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Name of this provider, for logging and diagnostics
    fn name(&self) -> &str;
}

pub mod caiyun;
pub mod mock;
