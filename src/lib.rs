/*!
 * # transwiki
 *
 * A Rust library and CLI for translating wiki-markup documents between
 * languages using batch translation APIs.
 *
 * ## Features
 *
 * - Normalize wikitext into translatable prose (templates, references,
 *   headings, lists, emphasis, internal links)
 * - Sentence-align whole documents: flatten paragraphs into one batched
 *   translation request and reconstruct the paragraph structure, blank
 *   lines included, at their original positions
 * - Pluggable translation providers (Caiyun API, mock)
 * - Bounded retry with backoff around the translation request
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `markup`: Wiki markup normalization rules
 * - `segmentation`: Sentence segmentation
 * - `alignment`: Flatten/regroup bookkeeping around the translation call
 * - `translation`: Retry-wrapped translation service
 * - `providers`: Client implementations for translation backends
 * - `pipeline`: Per-document normalize/flatten/translate/regroup pipeline
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod markup;
pub mod pipeline;
pub mod providers;
pub mod segmentation;
pub mod translation;

// Re-export main types for easier usage
pub use alignment::{FlattenedPassage, JoinPolicy, SentenceRun};
pub use app_config::Config;
pub use markup::MarkupNormalizer;
pub use pipeline::{DocumentTranslation, PassagePipeline};
pub use segmentation::{RuleSegmenter, SentenceSegmenter};
pub use translation::{RetryPolicy, TranslationService};
