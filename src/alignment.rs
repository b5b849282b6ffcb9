/*!
 * Passage alignment: flatten and regroup.
 *
 * Translation providers want one flat sentence list per request, but the
 * document is a positional sequence of lines where blank and skipped lines
 * must survive the round trip. `FlattenedPassage` records, per contributing
 * line, how many consecutive batch sentences it produced, and rebuilds the
 * document from the translated batch by replaying those runs and filling
 * every non-contributing position with an empty paragraph.
 */

use serde::{Deserialize, Serialize};

use crate::errors::AlignmentError;
use crate::segmentation::SentenceSegmenter;

/// How translated sentences are joined back into one paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    /// Concatenate with no separator (the upstream tokenizer convention)
    #[default]
    None,
    /// Insert a single space between sentences
    Space,
}

/// One run of consecutive batch sentences contributed by a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceRun {
    /// Zero-based index of the originating line
    pub line: usize,
    /// Number of sentences that line contributed
    pub count: usize,
}

/// A document flattened into a translation batch plus the bookkeeping
/// needed to reconstruct it.
#[derive(Debug, Default, Clone)]
pub struct FlattenedPassage {
    /// The global ordered sentence batch
    sentences: Vec<String>,
    /// Ordered line-index runs; one entry per contributing line
    runs: Vec<SentenceRun>,
    /// Length of the original document
    document_len: usize,
}

impl FlattenedPassage {
    /// Segment every non-blank line and flatten the results into one batch.
    ///
    /// Blank lines contribute nothing; a document of only blank lines yields
    /// an empty batch, in which case the translator must not be invoked and
    /// reconstruction produces all-empty paragraphs of the original length.
    pub fn flatten(lines: &[String], segmenter: &dyn SentenceSegmenter, language: &str) -> Self {
        let mut sentences = Vec::new();
        let mut runs = Vec::new();

        for (line, text) in lines.iter().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            let segmented = segmenter.segment(text, language);
            if segmented.is_empty() {
                continue;
            }
            runs.push(SentenceRun {
                line,
                count: segmented.len(),
            });
            sentences.extend(segmented);
        }

        Self {
            sentences,
            runs,
            document_len: lines.len(),
        }
    }

    /// Build a passage from pre-segmented parts.
    ///
    /// `runs` must be strictly increasing in line index and their counts must
    /// sum to `sentences.len()`; `flatten` guarantees this by construction.
    pub fn from_parts(sentences: Vec<String>, runs: Vec<SentenceRun>, document_len: usize) -> Self {
        debug_assert_eq!(
            runs.iter().map(|r| r.count).sum::<usize>(),
            sentences.len()
        );
        Self {
            sentences,
            runs,
            document_len,
        }
    }

    /// The flat sentence batch, in document order
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Number of sentences in the batch
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the batch is empty (no line contributed any sentence)
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Length of the original document
    pub fn document_len(&self) -> usize {
        self.document_len
    }

    /// Flat per-sentence origin view, one line index per batch sentence.
    /// Derived from the runs; useful for diagnostics and tests.
    pub fn origins(&self) -> Vec<usize> {
        self.runs
            .iter()
            .flat_map(|run| std::iter::repeat(run.line).take(run.count))
            .collect()
    }

    /// Regroup a translated batch into a document of the original length.
    ///
    /// Every position that contributed no sentences gets an empty paragraph:
    /// leading gaps before the first run, gaps between runs, and trailing
    /// gaps after the last run. The translated batch must correspond to the
    /// flattened batch element-wise; any arity drift is a contract violation
    /// and is never papered over.
    pub fn reconstruct(
        &self,
        translated: &[String],
        join: JoinPolicy,
    ) -> Result<Vec<String>, AlignmentError> {
        if translated.len() != self.sentences.len() {
            return Err(AlignmentError::BatchSizeMismatch {
                expected: self.sentences.len(),
                actual: translated.len(),
            });
        }

        let mut paragraphs: Vec<String> = Vec::with_capacity(self.document_len);
        let mut cursor = 0;

        for run in &self.runs {
            while paragraphs.len() < run.line {
                paragraphs.push(String::new());
            }
            let group = &translated[cursor..cursor + run.count];
            let paragraph = match join {
                JoinPolicy::None => group.concat(),
                JoinPolicy::Space => group.join(" "),
            };
            paragraphs.push(paragraph);
            cursor += run.count;
        }

        while paragraphs.len() < self.document_len {
            paragraphs.push(String::new());
        }

        if paragraphs.len() > self.document_len {
            return Err(AlignmentError::ParagraphOverflow {
                document_len: self.document_len,
                produced: paragraphs.len(),
            });
        }

        Ok(paragraphs)
    }
}
