//! Block-editor code language hints
//!
//! Syntax-highlighting blocks record their language in the block comment
//! that precedes the `<pre>`:
//!
//! ```html
//! <!-- wp:code {"language":"python"} -->
//! <pre class="wp-block-code">...</pre>
//! ```
//!
//! The comment is gone after parsing, so the language is copied onto the
//! `<pre>` itself as `data-code-language`, where the plain code block rule
//! reads it.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::utils::CODE_LANGUAGE_ATTR;

static LANGUAGE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<!-- wp:.+? \{"language":"([^"]+)"\} -->\r?\n<pre )"#)
        .expect("LANGUAGE_COMMENT_RE: hardcoded regex is valid")
});

/// Inject `data-code-language="X"` into each `<pre>` directly preceded by a
/// block comment carrying `{"language":"X"}`.
pub fn annotate_code_languages(html: &str) -> String {
    LANGUAGE_COMMENT_RE
        .replace_all(html, |caps: &Captures| {
            format!("{}{}=\"{}\" ", &caps[1], CODE_LANGUAGE_ATTR, &caps[2])
        })
        .into_owned()
}
