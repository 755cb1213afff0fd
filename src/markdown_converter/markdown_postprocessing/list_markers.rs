//! List marker spacing
//!
//! htmd pads list item content to the marker width, so items can come out as
//! `-   item` or `12.   item`. Those runs of spaces are collapsed to one.

use regex::Regex;
use std::sync::LazyLock;

use super::code_fence_detection::FenceTracker;

static PADDED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)(-|[0-9]+\.) {2,}")
        .expect("PADDED_MARKER_RE: hardcoded regex is valid")
});

/// Collapse the spaces after a leading `-` or `N.` list marker to exactly one.
///
/// Indentation before the marker is kept. Lines inside fenced code blocks
/// are copied unchanged.
pub fn normalize_list_marker_spacing(markdown: &str) -> String {
    let mut fences = FenceTracker::new();
    let mut result = String::with_capacity(markdown.len());

    for line in markdown.split_inclusive('\n') {
        if fences.observe(line) {
            result.push_str(line);
        } else {
            result.push_str(&PADDED_MARKER_RE.replace(line, "${1}${2} "));
        }
    }

    if let Some(fence) = fences.unclosed() {
        tracing::debug!(
            "Unclosed code fence starting at line {} (char: '{}', count: {})",
            fence.line_number,
            fence.char,
            fence.count
        );
    }

    result
}
