//! Plain `<pre>` blocks written without a nested `<code>`.
//!
//! The raw text is read straight from the tree instead of the converted
//! children, so `<`, `*` and `_` in source code come out unescaped. A `<pre>`
//! holding a `<code>` is left to the baseline fenced-code handling.

use htmd::Element;
use htmd::element_handler::Handlers;

use crate::markdown_converter::node_util::{extract_raw_text, get_attr, has_descendant_tag};
use crate::markdown_converter::rule_registry::Rule;
use crate::utils::CODE_LANGUAGE_ATTR;

pub(super) const PRE: Rule = Rule {
    name: "pre",
    tags: &["pre"],
    filter: has_no_code_child,
    replacement: pre_replacement,
};

fn has_no_code_child(element: &Element) -> bool {
    !has_descendant_tag(element.node, "code")
}

/// Backtick fence one longer than any backtick run in `code`, minimum three.
fn fence_for(code: &str) -> String {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest_run + 1).max(3))
}

fn pre_replacement(_handlers: &dyn Handlers, _content: &str, element: &Element) -> String {
    let language = get_attr(element.attrs, CODE_LANGUAGE_ATTR).unwrap_or_default();
    let code = extract_raw_text(element.node);
    let fence = fence_for(&code);
    format!("\n\n{fence}{language}\n{code}\n{fence}\n\n")
}
