//! Captioned figures kept as explicit `<figure>`/`<figcaption>` markup.
//!
//! Markdown has no caption syntax, so the wrapper tags survive while their
//! contents (images, links, emphasis) are still converted.

use htmd::Element;
use htmd::element_handler::Handlers;

use crate::markdown_converter::node_util::has_descendant_tag;
use crate::markdown_converter::rule_registry::Rule;

/// Figures without a caption are left to the baseline, which unwraps them.
pub(super) const FIGURE: Rule = Rule {
    name: "figure",
    tags: &["figure"],
    filter: has_caption,
    replacement: figure_replacement,
};

pub(super) const FIGCAPTION: Rule = Rule {
    name: "figcaption",
    tags: &["figcaption"],
    filter: any_element,
    replacement: figcaption_replacement,
};

fn any_element(_element: &Element) -> bool {
    true
}

fn has_caption(element: &Element) -> bool {
    has_descendant_tag(element.node, "figcaption")
}

/// Wrap converted children in `tag`, one blank line inside and out.
///
/// Only the padding newlines of `content` are dropped; blank lines inside it
/// (code blocks, paragraphs) are kept as converted.
fn wrap_block(tag: &str, content: &str) -> String {
    format!(
        "\n\n<{tag}>\n\n{}\n\n</{tag}>\n\n",
        content.trim_matches('\n')
    )
}

fn figure_replacement(_handlers: &dyn Handlers, content: &str, _element: &Element) -> String {
    wrap_block("figure", content)
}

fn figcaption_replacement(_handlers: &dyn Handlers, content: &str, _element: &Element) -> String {
    wrap_block("figcaption", content)
}
