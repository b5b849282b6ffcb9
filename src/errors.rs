/*!
 * Error types for the transwiki application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with translation provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Contract violations detected while regrouping translated sentences.
///
/// These are fatal for the document being processed: they mean the translated
/// batch no longer lines up with what was flattened, and patching over the
/// mismatch would silently corrupt the output.
#[derive(Error, Debug)]
pub enum AlignmentError {
    /// The translated batch does not have one element per flattened sentence
    #[error("translated batch size mismatch: expected {expected} sentences, got {actual}")]
    BatchSizeMismatch {
        /// Number of sentences sent for translation
        expected: usize,
        /// Number of translations received
        actual: usize,
    },

    /// Regrouping produced more paragraphs than the document has lines
    #[error("regrouping overflowed the document: {document_len} lines, produced {produced} paragraphs")]
    ParagraphOverflow {
        /// Original document length
        document_len: usize,
        /// Paragraph count the regrouping produced
        produced: usize,
    },
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The retry budget was exhausted without a usable translation
    #[error("translation unavailable after {attempts} attempts")]
    Unavailable {
        /// Number of attempts made before giving up
        attempts: u32,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Alignment contract violation while reconstructing a document
    #[error("Alignment error in '{document}': {source}")]
    Alignment {
        /// Identity of the document being processed
        document: String,
        /// The underlying contract violation
        #[source]
        source: AlignmentError,
    },

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
