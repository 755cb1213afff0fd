//! "Read more" separator preservation
//!
//! The manual excerpt separator is an HTML comment (`<!--more-->`, optionally
//! `<!--more Continue reading-->`). The parser would drop it like any other
//! comment, so its angle brackets are entity-escaped and it survives as text.
//! The converter decodes the entities and escapes `<`; postprocessing puts
//! the `&lt;!--more--&gt;` form back for downstream tooling.
//!
//! Only the first separator is escaped. A post with several separators keeps
//! the first and loses the rest.

use regex::Regex;
use std::sync::LazyLock;

static MORE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(!--more(?: [^>]*?)?--)>").expect("MORE_COMMENT_RE: hardcoded regex is valid")
});

/// Escape the first `<!--more-->` comment so it is parsed as literal text.
pub fn escape_more_marker(html: &str) -> String {
    MORE_COMMENT_RE.replace(html, "&lt;${1}&gt;").into_owned()
}
