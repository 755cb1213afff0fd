//! Blank-line paragraph markers
//!
//! Post bodies written in the classic editor separate paragraphs with blank
//! lines instead of `<p>` tags. Once parsed, those blank lines are plain
//! whitespace and collapse to a single space. Putting an empty `<div>` at
//! every blank line gives the tree walker a block boundary, which it renders
//! as a paragraph break.
//!
//! Limitation: markers are not scoped, so a blank line inside `<pre>` gets
//! one too. The plain code block rule reads raw text and the empty marker
//! contributes nothing there; other handlers walking a `<pre><code>` block
//! may see an extra block boundary.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::utils::PARAGRAPH_MARKER;

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\r?\n){2}").expect("BLANK_LINE_RE: hardcoded regex is valid")
});

static MARKER_REPLACEMENT: LazyLock<String> =
    LazyLock::new(|| format!("\n{PARAGRAPH_MARKER}\n"));

/// Replace each pair of consecutive line breaks with `\n<div></div>\n`.
///
/// Pairs are consumed left to right without overlap, so three line breaks
/// produce one marker followed by the leftover break.
pub fn insert_paragraph_markers(html: &str) -> String {
    BLANK_LINE_RE
        .replace_all(html, NoExpand(MARKER_REPLACEMENT.as_str()))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_gets_marker() {
        assert_eq!(
            insert_paragraph_markers("one\n\ntwo"),
            "one\n<div></div>\ntwo"
        );
    }

    #[test]
    fn test_crlf_blank_line_gets_marker() {
        assert_eq!(
            insert_paragraph_markers("one\r\n\r\ntwo"),
            "one\n<div></div>\ntwo"
        );
    }

    #[test]
    fn test_single_newline_untouched() {
        assert_eq!(insert_paragraph_markers("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn test_triple_newline_consumes_one_pair() {
        assert_eq!(
            insert_paragraph_markers("one\n\n\ntwo"),
            "one\n<div></div>\n\ntwo"
        );
    }

    #[test]
    fn test_every_blank_line_marked() {
        let result = insert_paragraph_markers("a\n\nb\n\nc");
        assert_eq!(result.matches(PARAGRAPH_MARKER).count(), 2);
    }
}
