/*!
 * Tests for sentence segmentation
 */

use transwiki::segmentation::{RuleSegmenter, SentenceSegmenter};

/// Test basic English sentence splitting
#[test]
fn test_segment_withEnglishText_shouldSplitOnTerminators() {
    let segmenter = RuleSegmenter::new();
    let sentences = segmenter.segment("Hello world. Goodbye now.", "en");
    assert_eq!(sentences, vec!["Hello world.", "Goodbye now."]);
}

/// Test that all terminator kinds end a sentence
#[test]
fn test_segment_withMixedTerminators_shouldSplitOnAll() {
    let segmenter = RuleSegmenter::new();
    let sentences = segmenter.segment("Really? Yes! Fine.", "en");
    assert_eq!(sentences, vec!["Really?", "Yes!", "Fine."]);
}

/// Test that a period without following whitespace does not split
#[test]
fn test_segment_withDecimalNumber_shouldNotSplitMidToken() {
    let segmenter = RuleSegmenter::new();
    let sentences = segmenter.segment("Pi is 3.14 exactly. Indeed.", "en");
    assert_eq!(sentences, vec!["Pi is 3.14 exactly.", "Indeed."]);
}

/// Test that closing quotes stay with their sentence
#[test]
fn test_segment_withClosingQuote_shouldKeepQuoteAttached() {
    let segmenter = RuleSegmenter::new();
    let sentences = segmenter.segment("He said \"stop.\" She left.", "en");
    assert_eq!(sentences, vec!["He said \"stop.\"", "She left."]);
}

/// Test CJK splitting without whitespace between sentences
#[test]
fn test_segment_withChineseText_shouldSplitOnCjkTerminators() {
    let segmenter = RuleSegmenter::new();
    let sentences = segmenter.segment("你好。再见！好吗？", "zh");
    assert_eq!(sentences, vec!["你好。", "再见！", "好吗？"]);
}

/// Test that empty and whitespace-only input yields no sentences
#[test]
fn test_segment_withBlankInput_shouldYieldNothing() {
    let segmenter = RuleSegmenter::new();
    assert!(segmenter.segment("", "en").is_empty());
    assert!(segmenter.segment("   ", "en").is_empty());
    assert!(segmenter.segment("", "zh").is_empty());
}

/// Test that text without a terminator is one sentence
#[test]
fn test_segment_withNoTerminator_shouldYieldSingleSentence() {
    let segmenter = RuleSegmenter::new();
    let sentences = segmenter.segment("no punctuation here", "en");
    assert_eq!(sentences, vec!["no punctuation here"]);
}

/// Test that no text content is dropped or reordered
#[test]
fn test_segment_withMultipleSentences_shouldPreserveAllContent() {
    let segmenter = RuleSegmenter::new();
    let input = "One. Two. Three.";
    let sentences = segmenter.segment(input, "en");
    assert_eq!(sentences.join(" "), input);
}
