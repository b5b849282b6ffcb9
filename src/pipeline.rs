/*!
 * The document translation pipeline.
 *
 * One document flows through four stages, strictly in order: normalize the
 * markup, flatten the normalized lines into a sentence batch, translate the
 * batch in one request, regroup the translations into a document of the
 * original length. The stages before and after the translation request are
 * pure; the request itself is the only await point.
 */

use log::{debug, info};

use crate::alignment::{FlattenedPassage, JoinPolicy};
use crate::errors::AppError;
use crate::markup::MarkupNormalizer;
use crate::segmentation::SentenceSegmenter;
use crate::translation::TranslationService;

/// Result of pushing one document through the pipeline
#[derive(Debug, Clone)]
pub struct DocumentTranslation {
    /// Normalized lines, one per input line
    pub normalized: Vec<String>,
    /// Translated paragraphs, one per input line
    pub translated: Vec<String>,
}

/// Normalize -> flatten -> translate -> regroup for one document at a time
pub struct PassagePipeline {
    normalizer: MarkupNormalizer,
    segmenter: Box<dyn SentenceSegmenter>,
    service: TranslationService,
    join: JoinPolicy,
}

impl PassagePipeline {
    /// Create a new pipeline
    pub fn new(
        segmenter: Box<dyn SentenceSegmenter>,
        service: TranslationService,
        join: JoinPolicy,
    ) -> Self {
        Self {
            normalizer: MarkupNormalizer::new(),
            segmenter,
            service,
            join,
        }
    }

    /// Translate one document.
    ///
    /// The output has exactly one translated paragraph per input line, empty
    /// where the line was blank or skipped. A document contributing no
    /// sentences never reaches the translator. Alignment violations and
    /// translation unavailability propagate as distinguishable errors
    /// carrying the document identity.
    pub async fn translate_document(
        &self,
        document: &str,
        lines: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<DocumentTranslation, AppError> {
        let normalized = self.normalizer.normalize_lines(lines);
        let passage = FlattenedPassage::flatten(&normalized, self.segmenter.as_ref(), source_language);

        let translated_batch = if passage.is_empty() {
            debug!("'{}' contributed no sentences; translator not invoked", document);
            Vec::new()
        } else {
            info!(
                "Translating '{}': {} sentences from {} lines",
                document,
                passage.len(),
                lines.len()
            );
            self.service
                .translate_batch(passage.sentences(), source_language, target_language)
                .await?
        };

        let translated = passage
            .reconstruct(&translated_batch, self.join)
            .map_err(|source| AppError::Alignment {
                document: document.to_string(),
                source,
            })?;

        Ok(DocumentTranslation {
            normalized,
            translated,
        })
    }
}
