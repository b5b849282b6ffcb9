/*!
 * Tests for wiki markup normalization
 */

use transwiki::markup::MarkupNormalizer;

fn normalize(line: &str) -> String {
    MarkupNormalizer::new().normalize_line(line)
}

/// Test that a full template transclusion line is blanked
#[test]
fn test_normalize_line_withTemplateOnlyLine_shouldBlank() {
    assert_eq!(normalize("{{cite|x}}"), "");
    assert_eq!(normalize("{{Infobox|name=Rust|year=2010}}"), "");
    // Content inside the braces is irrelevant
    assert_eq!(normalize("{{anything at all, however long}}"), "");
}

/// Test that section headings are blanked
#[test]
fn test_normalize_line_withHeading_shouldBlank() {
    assert_eq!(normalize("== History =="), "");
    assert_eq!(normalize("====== Notes ======"), "");
    assert_eq!(normalize("  == Indented heading ==  "), "");
}

/// Test that a single `=` is not a heading
#[test]
fn test_normalize_line_withSingleEquals_shouldNotBlank() {
    assert_eq!(normalize("= Not a heading ="), "= Not a heading =");
}

/// Test that bulleted list items are blanked
#[test]
fn test_normalize_line_withListItem_shouldBlank() {
    assert_eq!(normalize("* first item"), "");
    assert_eq!(normalize("*terse"), "");
}

/// Test that a bare asterisk is not a list item
#[test]
fn test_normalize_line_withBareAsterisk_shouldPassThrough() {
    assert_eq!(normalize("*"), "*");
}

/// Test reference block stripping
#[test]
fn test_normalize_line_withRefBlock_shouldStrip() {
    assert_eq!(normalize("A<ref>cite info</ref> fact"), "A fact");
    assert_eq!(
        normalize("A<ref name=\"src\">long citation</ref> fact"),
        "A fact"
    );
}

/// Test self-closing reference stripping
#[test]
fn test_normalize_line_withSelfClosingRef_shouldStrip() {
    assert_eq!(normalize("A<ref name=x/> fact"), "A fact");
}

/// Test emphasis marker stripping
#[test]
fn test_normalize_line_withEmphasis_shouldStrip() {
    assert_eq!(normalize("''italic'' and '''bold'''"), "italic and bold");
    assert_eq!(normalize("'''''both'''''"), "both");
}

/// Test leading marker stripping
#[test]
fn test_normalize_line_withLeadingMarkers_shouldStrip() {
    assert_eq!(normalize("#numbered entry"), "numbered entry");
    assert_eq!(normalize(";definition"), "definition");
    assert_eq!(normalize("::indented text"), "indented text");
}

/// Test that mid-line templates are removed as substrings
#[test]
fn test_normalize_line_withInlineTemplate_shouldStripSubstring() {
    assert_eq!(normalize("Start {{cite|x}} end"), "Start  end");
}

/// Test link rewriting with a display segment
#[test]
fn test_normalize_line_withPipedLink_shouldUseDisplayText() {
    assert_eq!(
        normalize("See [[Target|shown text]] now"),
        "See shown text now"
    );
}

/// Test link rewriting without a pipe
#[test]
fn test_normalize_line_withPlainLink_shouldUseTarget() {
    assert_eq!(normalize("See [[Target]] now"), "See Target now");
}

/// Test multiple links in one line
#[test]
fn test_normalize_line_withMultipleLinks_shouldRewriteAll() {
    assert_eq!(
        normalize("[[A|one]] and [[B]] and [[C|three]]"),
        "one and B and three"
    );
}

/// Test that a pipe with empty display falls back to the inner text
#[test]
fn test_normalize_line_withEmptyDisplaySegment_shouldKeepInnerText() {
    assert_eq!(normalize("See [[Target|]] now"), "See Target| now");
}

/// Test that malformed brackets never raise and stay untouched
#[test]
fn test_normalize_line_withMalformedBrackets_shouldPassThrough() {
    assert_eq!(normalize("See [[broken now"), "See [[broken now");
    assert_eq!(normalize("stray ]] close"), "stray ]] close");
}

/// Test that plain prose passes through unchanged
#[test]
fn test_normalize_line_withPlainProse_shouldPassThrough() {
    assert_eq!(normalize("Just plain prose."), "Just plain prose.");
}

/// Test that document normalization preserves length
#[test]
fn test_normalize_lines_withMixedDocument_shouldPreserveLength() {
    let lines: Vec<String> = vec![
        "{{Infobox}}".to_string(),
        "== Heading ==".to_string(),
        "'''Bold''' prose with [[Link|text]].".to_string(),
        "".to_string(),
        "* skipped item".to_string(),
    ];
    let normalized = MarkupNormalizer::new().normalize_lines(&lines);
    assert_eq!(normalized.len(), lines.len());
    assert_eq!(normalized[0], "");
    assert_eq!(normalized[1], "");
    assert_eq!(normalized[2], "Bold prose with text.");
    assert_eq!(normalized[3], "");
    assert_eq!(normalized[4], "");
}

/// Test that skip rules apply to the whole line only
#[test]
fn test_normalize_line_withTemplateInsideProse_shouldNotBlank() {
    let result = normalize("prose before {{cite|x}} prose after");
    assert_eq!(result, "prose before  prose after");
}
