//! Block-editor table figures (`figure.wp-block-table`).

use htmd::Element;
use htmd::element_handler::Handlers;
use markup5ever_rcdom::Node;
use std::rc::Rc;

use crate::markdown_converter::node_util::{find_descendant_by_tag, has_class};
use crate::markdown_converter::rule_registry::Rule;
use crate::utils::TABLE_FIGURE_CLASS;

pub(super) const TABLE: Rule = Rule {
    name: "table",
    tags: &["figure"],
    filter: is_table_figure,
    replacement: table_replacement,
};

fn is_table_figure(element: &Element) -> bool {
    has_class(element.attrs, TABLE_FIGURE_CLASS)
}

/// Run a sub-tree through the full handler set on its own.
fn convert_isolated(handlers: &dyn Handlers, node: &Rc<Node>) -> String {
    handlers
        .handle(node)
        .map(|result| result.content.trim_matches('\n').to_string())
        .unwrap_or_default()
}

/// The nested table converted alone, followed by its caption when present.
/// A table figure with no `<table>` is dropped.
fn table_replacement(handlers: &dyn Handlers, _content: &str, element: &Element) -> String {
    let Some(table) = find_descendant_by_tag(element.node, "table") else {
        tracing::debug!("Table figure without a <table>, dropping it");
        return String::new();
    };

    let mut markdown = convert_isolated(handlers, &table);
    if let Some(caption) = find_descendant_by_tag(element.node, "figcaption") {
        markdown.push_str("\n\n");
        markdown.push_str(&convert_isolated(handlers, &caption));
    }

    format!("\n\n{markdown}\n\n")
}
