//! "Read more" separator restore
//!
//! Preprocessing turns the separator into `&lt;!--more--&gt;` text. The
//! converter decodes that back to `<!--more-->` and escapes the opening
//! bracket, giving `\<!--more-->`. This pass writes the entity form back so
//! downstream tooling sees its excerpt marker verbatim.

use regex::Regex;
use std::sync::LazyLock;

use super::code_fence_detection::FenceTracker;

static ESCAPED_MORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\?<(!--more(?: [^>\n]*?)?--)\\?>")
        .expect("ESCAPED_MORE_RE: hardcoded regex is valid")
});

/// Rewrite the first separator outside fenced code as `&lt;!--more…--&gt;`.
pub fn restore_more_marker(markdown: &str) -> String {
    let mut fences = FenceTracker::new();
    let mut restored = false;
    let mut result = String::with_capacity(markdown.len() + 6);

    for line in markdown.split_inclusive('\n') {
        if fences.observe(line) || restored || !ESCAPED_MORE_RE.is_match(line) {
            result.push_str(line);
            continue;
        }
        result.push_str(&ESCAPED_MORE_RE.replace(line, "&lt;${1}&gt;"));
        restored = true;
    }

    result
}
