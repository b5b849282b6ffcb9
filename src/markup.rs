/*!
 * Wiki markup normalization.
 *
 * This module turns raw wikitext lines into translatable prose. Each line is
 * either blanked entirely (skip rules: the line is pure markup and carries no
 * prose) or cleaned in place (strip rules and the link rewrite). The output
 * always has exactly one entry per input line, so downstream alignment can
 * map translated paragraphs back to their original positions.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// A line that is entirely one template transclusion, e.g. `{{cite|x}}`
static TEMPLATE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{\{.+?\}\}$").unwrap());

/// A line that is a bulleted list item
static LIST_ITEM_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*.+$").unwrap());

/// Reference blocks with contents, non-greedy: `<ref ...>...</ref>`
static REF_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ref.*?>.+?</ref>").unwrap());

/// Self-closing reference tags: `<ref name=x/>`
static REF_SELF_CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ref.*?/>").unwrap());

/// Emphasis/bold markers: runs of 2 to 5 apostrophes
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"'{2,5}").unwrap());

/// Leading unordered-list marker
static LEADING_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#").unwrap());

/// Leading definition marker
static LEADING_SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^;").unwrap());

/// Leading indentation markers
static LEADING_COLONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:+").unwrap());

/// Template transclusions occurring mid-line
static TEMPLATE_INLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{.+?\}\}").unwrap());

/// Internal link spans, non-greedy: `[[target|display]]` or `[[target]]`
static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());

/// How a skip rule decides that a whole line is markup-only
enum SkipRule {
    /// The trimmed line must match this pattern in full
    Pattern(&'static Lazy<Regex>),
    /// The trimmed line is classified by a predicate (used where the rule
    /// needs a backreference, which the regex crate does not support)
    Predicate(fn(&str) -> bool),
}

impl SkipRule {
    fn matches(&self, trimmed: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(trimmed),
            Self::Predicate(predicate) => predicate(trimmed),
        }
    }
}

/// Section heading: an opening run of 2-6 `=` characters, at least one
/// character of text, and a closing run mirroring the opening one.
fn is_heading(trimmed: &str) -> bool {
    let opening = trimmed.chars().take_while(|&c| c == '=').count();
    let closing = trimmed.chars().rev().take_while(|&c| c == '=').count();
    opening >= 2 && closing >= 2 && trimmed.chars().count() >= 5
}

/// Skip rules, checked against the trimmed line in order
static SKIP_RULES: [SkipRule; 3] = [
    SkipRule::Pattern(&TEMPLATE_LINE),
    SkipRule::Predicate(is_heading),
    SkipRule::Pattern(&LIST_ITEM_LINE),
];

/// Strip rules, applied line-internally in this exact order. Each removes
/// all matching substrings; order matters because reference blocks may
/// contain template syntax that must not be half-stripped first.
static STRIP_RULES: [&Lazy<Regex>; 7] = [
    &REF_BLOCK,
    &REF_SELF_CLOSING,
    &EMPHASIS,
    &LEADING_HASH,
    &LEADING_SEMICOLON,
    &LEADING_COLONS,
    &TEMPLATE_INLINE,
];

/// Normalizes wikitext lines into plain prose, one output line per input line
#[derive(Debug, Default, Clone)]
pub struct MarkupNormalizer;

impl MarkupNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize a full document, preserving its length.
    ///
    /// Lines matching a skip rule come back empty; every other line comes
    /// back with markup stripped and links rewritten.
    pub fn normalize_lines(&self, lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| self.normalize_line(line)).collect()
    }

    /// Normalize a single line
    pub fn normalize_line(&self, line: &str) -> String {
        if Self::is_skipped(line) {
            return String::new();
        }
        let stripped = Self::strip_syntax(line);
        Self::rewrite_links(&stripped)
    }

    /// Check whether the entire trimmed line matches any skip rule
    fn is_skipped(line: &str) -> bool {
        let trimmed = line.trim();
        SKIP_RULES.iter().any(|rule| rule.matches(trimmed))
    }

    /// Apply every strip rule in order, each removing all matches
    fn strip_syntax(line: &str) -> String {
        let mut text = line.to_string();
        for pattern in STRIP_RULES.iter() {
            if pattern.is_match(&text) {
                text = pattern.replace_all(&text, "").into_owned();
            }
        }
        text
    }

    /// Replace every `[[...]]` span with its display text.
    ///
    /// A pipe splits target from display; the display segment after the last
    /// pipe wins. A span without a pipe, or with nothing after the pipe,
    /// falls back to the whole inner text. Malformed bracketing never errors,
    /// it just fails to match and stays untouched.
    fn rewrite_links(line: &str) -> String {
        if !WIKI_LINK.is_match(line) {
            return line.to_string();
        }
        WIKI_LINK
            .replace_all(line, |caps: &regex::Captures| {
                let inner = &caps[1];
                match inner.rfind('|') {
                    Some(pos) if pos + 1 < inner.len() => inner[pos + 1..].to_string(),
                    _ => inner.to_string(),
                }
            })
            .into_owned()
    }
}
