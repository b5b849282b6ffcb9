/*!
 * Tests for passage flatten/regroup alignment
 */

use transwiki::alignment::{FlattenedPassage, JoinPolicy, SentenceRun};
use transwiki::errors::AlignmentError;
use transwiki::segmentation::RuleSegmenter;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Test that flatten records one origin per sentence, in order
#[test]
fn test_flatten_withMixedDocument_shouldRecordOrigins() {
    let document = lines(&["Hello world. Goodbye now.", "", "Third sentence."]);
    let passage = FlattenedPassage::flatten(&document, &RuleSegmenter::new(), "en");

    assert_eq!(
        passage.sentences(),
        &["Hello world.", "Goodbye now.", "Third sentence."]
    );
    assert_eq!(passage.origins(), vec![0, 0, 2]);
    assert_eq!(passage.document_len(), 3);
}

/// Test the gap reconstruction case: a blank middle line gets an empty paragraph
#[test]
fn test_reconstruct_withGap_shouldInsertEmptyParagraph() {
    let passage = FlattenedPassage::from_parts(
        lines(&["Hello world.", "Goodbye now."]),
        vec![
            SentenceRun { line: 0, count: 1 },
            SentenceRun { line: 2, count: 1 },
        ],
        3,
    );
    let translated = lines(&["Bonjour monde.", "Au revoir."]);
    let result = passage.reconstruct(&translated, JoinPolicy::None).unwrap();
    assert_eq!(result, lines(&["Bonjour monde.", "", "Au revoir."]));
}

/// Test that contiguous same-line sentences are concatenated without separator
#[test]
fn test_reconstruct_withMultiSentenceLine_shouldConcatenate() {
    let passage = FlattenedPassage::from_parts(
        lines(&["One.", "Two."]),
        vec![SentenceRun { line: 0, count: 2 }],
        1,
    );
    let result = passage
        .reconstruct(&lines(&["Un.", "Deux."]), JoinPolicy::None)
        .unwrap();
    assert_eq!(result, lines(&["Un.Deux."]));
}

/// Test the space join policy
#[test]
fn test_reconstruct_withSpaceJoinPolicy_shouldInsertSpaces() {
    let passage = FlattenedPassage::from_parts(
        lines(&["One.", "Two."]),
        vec![SentenceRun { line: 0, count: 2 }],
        1,
    );
    let result = passage
        .reconstruct(&lines(&["Un.", "Deux."]), JoinPolicy::Space)
        .unwrap();
    assert_eq!(result, lines(&["Un. Deux."]));
}

/// Test leading blank lines before the first contributing line
#[test]
fn test_reconstruct_withLeadingBlanks_shouldPadFront() {
    let passage = FlattenedPassage::from_parts(
        lines(&["Text."]),
        vec![SentenceRun { line: 2, count: 1 }],
        4,
    );
    let result = passage
        .reconstruct(&lines(&["Texte."]), JoinPolicy::None)
        .unwrap();
    assert_eq!(result, lines(&["", "", "Texte.", ""]));
}

/// Test an all-blank document: empty batch, same-length all-empty output
#[test]
fn test_reconstruct_withAllBlankDocument_shouldYieldEmptyParagraphs() {
    let document = lines(&["", "   ", ""]);
    let passage = FlattenedPassage::flatten(&document, &RuleSegmenter::new(), "en");

    assert!(passage.is_empty());
    let result = passage.reconstruct(&[], JoinPolicy::None).unwrap();
    assert_eq!(result, lines(&["", "", ""]));
}

/// Test that a short translated batch is a contract violation, never padded
#[test]
fn test_reconstruct_withShortBatch_shouldFailWithMismatch() {
    let passage = FlattenedPassage::from_parts(
        lines(&["One.", "Two."]),
        vec![SentenceRun { line: 0, count: 2 }],
        1,
    );
    let result = passage.reconstruct(&lines(&["Un."]), JoinPolicy::None);
    match result {
        Err(AlignmentError::BatchSizeMismatch { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected BatchSizeMismatch, got {:?}", other),
    }
}

/// Test that a run beyond the document length is a contract violation
#[test]
fn test_reconstruct_withRunBeyondDocument_shouldFailWithOverflow() {
    let passage = FlattenedPassage::from_parts(
        lines(&["Text."]),
        vec![SentenceRun { line: 5, count: 1 }],
        3,
    );
    let result = passage.reconstruct(&lines(&["Texte."]), JoinPolicy::None);
    match result {
        Err(AlignmentError::ParagraphOverflow {
            document_len,
            produced,
        }) => {
            assert_eq!(document_len, 3);
            assert_eq!(produced, 6);
        }
        other => panic!("expected ParagraphOverflow, got {:?}", other),
    }
}

/// Test length invariance across a flatten/reconstruct round trip
#[test]
fn test_roundTrip_withArbitraryDocument_shouldPreserveLength() {
    let document = lines(&[
        "",
        "First. Second. Third.",
        "",
        "",
        "Fourth.",
        "Fifth. Sixth.",
        "",
    ]);
    let passage = FlattenedPassage::flatten(&document, &RuleSegmenter::new(), "en");

    // Identity "translation" keeps the batch as-is
    let identity: Vec<String> = passage.sentences().to_vec();
    let result = passage.reconstruct(&identity, JoinPolicy::None).unwrap();
    assert_eq!(result.len(), document.len());

    // Blank positions stay blank, contributing positions do not
    for (original, reconstructed) in document.iter().zip(result.iter()) {
        assert_eq!(original.trim().is_empty(), reconstructed.is_empty());
    }
}

/// Test trailing blank lines are padded to the document length
#[test]
fn test_reconstruct_withTrailingBlanks_shouldPadToLength() {
    let document = lines(&["Only line.", "", ""]);
    let passage = FlattenedPassage::flatten(&document, &RuleSegmenter::new(), "en");
    let result = passage
        .reconstruct(&lines(&["Seule ligne."]), JoinPolicy::None)
        .unwrap();
    assert_eq!(result, lines(&["Seule ligne.", "", ""]));
}
