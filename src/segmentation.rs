/*!
 * Sentence segmentation.
 *
 * The aligner needs paragraphs split into sentences before batching them for
 * translation. The splitter is behind a trait so alternative segmenters can
 * be plugged in; the shipped `RuleSegmenter` is a terminator-punctuation
 * scanner that covers whitespace-delimited scripts and CJK text.
 */

/// Language-aware splitter from one paragraph to an ordered sentence list.
///
/// Implementations must not drop or reorder text content: concatenating the
/// returned sentences (modulo consumed inter-sentence whitespace) must yield
/// the input paragraph.
pub trait SentenceSegmenter: Send + Sync {
    /// Split a paragraph into sentences.
    ///
    /// # Arguments
    /// * `text` - The paragraph to split
    /// * `language` - ISO 639-1 language hint (e.g. "en", "zh")
    ///
    /// # Returns
    /// * Ordered sentence list; empty for blank input
    fn segment(&self, text: &str, language: &str) -> Vec<String>;
}

/// Sentence terminators for CJK scripts, where no following space is required
const CJK_TERMINATORS: [char; 6] = ['。', '．', '！', '？', '!', '?'];

/// Characters that may trail a terminator and still belong to the sentence
const TRAILING_CLOSERS: [char; 5] = ['"', '\'', ')', ']', '”'];

/// Rule-based sentence segmenter.
///
/// For CJK language hints a sentence ends after a run of terminator
/// punctuation (plus any closing quotes or brackets). For everything else a
/// sentence ends at `.`, `!` or `?` followed by whitespace; the whitespace is
/// consumed and sentences are emitted trimmed, matching the tokenizer
/// convention the separator-free paragraph join relies on.
#[derive(Debug, Default, Clone)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create a new rule-based segmenter
    pub fn new() -> Self {
        Self
    }

    fn segment_cjk(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if CJK_TERMINATORS.contains(&c) {
                // Keep terminator runs and closing punctuation together
                while chars
                    .peek()
                    .is_some_and(|n| CJK_TERMINATORS.contains(n) || TRAILING_CLOSERS.contains(n))
                {
                    current.push(chars.next().unwrap());
                }
                Self::flush(&mut current, &mut sentences);
            }
        }
        Self::flush(&mut current, &mut sentences);
        sentences
    }

    fn segment_spaced(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                while chars.peek().is_some_and(|n| TRAILING_CLOSERS.contains(n)) {
                    current.push(chars.next().unwrap());
                }
                // A boundary only where whitespace follows; "3.14" stays whole
                if chars.peek().is_some_and(|n| n.is_whitespace()) {
                    while chars.peek().is_some_and(|n| n.is_whitespace()) {
                        chars.next();
                    }
                    Self::flush(&mut current, &mut sentences);
                }
            }
        }
        Self::flush(&mut current, &mut sentences);
        sentences
    }

    fn flush(current: &mut String, sentences: &mut Vec<String>) {
        let sentence = current.trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        current.clear();
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str, language: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        match language {
            "zh" | "ja" => Self::segment_cjk(text),
            _ => Self::segment_spaced(text),
        }
    }
}
