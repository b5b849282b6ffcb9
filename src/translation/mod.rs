/*!
 * Translation orchestration.
 *
 * This module wraps a translation provider with the retry policy the
 * pipeline relies on:
 * - `translation::core`: TranslationService and RetryPolicy
 */

pub mod core;

pub use core::{RetryPolicy, TranslationService};
