use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The direction tag the translation API expects is built from two-letter
/// codes, so only ISO 639-1 codes are accepted here.
/// Validate that a language code is a valid ISO 639-1 code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid ISO 639-1 language code: {}", code))
}

/// English display name for a language code, falling back to the code itself
pub fn language_name(code: &str) -> String {
    let normalized_code = code.trim().to_lowercase();
    Language::from_639_1(&normalized_code)
        .map(|l| l.to_name().to_string())
        .unwrap_or_else(|| code.to_string())
}
