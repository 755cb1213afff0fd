//! Read-only helpers over the parsed `markup5ever_rcdom` tree.
//!
//! Domain rules only ever inspect nodes: attribute lookup, class tests,
//! descendant search, raw text and outer HTML serialization.

use html5ever::Attribute;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use markup5ever_rcdom::{Node, NodeData, SerializableHandle};
use std::rc::{Rc, Weak};

pub(crate) fn get_node_tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&name.local),
        _ => None,
    }
}

pub(crate) fn is_text_node(node: &Rc<Node>) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

/// Get a non-blank attribute value.
pub(crate) fn get_attr(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}

/// Attribute presence, regardless of value.
pub(crate) fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|a| &*a.name.local == name)
}

/// Whether the whitespace-separated `class` list contains `class_name`.
pub(crate) fn has_class(attrs: &[Attribute], class_name: &str) -> bool {
    attrs
        .iter()
        .find(|a| &*a.name.local == "class")
        .is_some_and(|a| a.value.split_whitespace().any(|c| c == class_name))
}

pub(crate) fn node_has_class(node: &Rc<Node>, class_name: &str) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => has_class(&attrs.borrow(), class_name),
        _ => false,
    }
}

/// First descendant (document order, excluding `node` itself) satisfying `predicate`.
pub(crate) fn find_descendant<F>(node: &Rc<Node>, predicate: &F) -> Option<Rc<Node>>
where
    F: Fn(&Rc<Node>) -> bool,
{
    for child in node.children.borrow().iter() {
        if predicate(child) {
            return Some(Rc::clone(child));
        }
        if let Some(found) = find_descendant(child, predicate) {
            return Some(found);
        }
    }
    None
}

pub(crate) fn find_descendant_by_tag(node: &Rc<Node>, tag: &str) -> Option<Rc<Node>> {
    find_descendant(node, &|n: &Rc<Node>| get_node_tag_name(n) == Some(tag))
}

pub(crate) fn has_descendant_tag(node: &Rc<Node>, tag: &str) -> bool {
    find_descendant_by_tag(node, tag).is_some()
}

pub(crate) fn get_parent_node(node: &Rc<Node>) -> Option<Rc<Node>> {
    // The parent slot is a Cell, so it is taken and put back. Upgrading a
    // Weak cannot panic, so the slot is always restored.
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(Weak::upgrade);
    node.parent.set(weak);
    parent
}

/// The sibling immediately before `node`, including whitespace text nodes.
pub(crate) fn previous_sibling(node: &Rc<Node>) -> Option<Rc<Node>> {
    let parent = get_parent_node(node)?;
    let children = parent.children.borrow();
    let idx = children.iter().position(|c| Rc::ptr_eq(c, node))?;
    idx.checked_sub(1).and_then(|i| children.get(i)).map(Rc::clone)
}

/// Concatenated text of all descendant text nodes, whitespace preserved.
///
/// Bypasses the handler pipeline entirely, so nothing is escaped.
pub(crate) fn extract_raw_text(node: &Rc<Node>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Rc<Node>, text: &mut String) {
    match &node.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                collect_text(child, text);
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}

/// Serialize `node` and its subtree back to HTML.
///
/// Serialization of an in-memory tree only fails on a broken writer; the
/// failure is logged and an empty string returned so the rest of the post
/// still converts.
pub(crate) fn outer_html(node: &Rc<Node>) -> String {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let handle = SerializableHandle::from(Rc::clone(node));
    let mut bytes = Vec::new();
    if let Err(e) = serialize(&mut bytes, &handle, opts) {
        log::warn!("Failed to serialize node for passthrough: {e}");
        return String::new();
    }
    match String::from_utf8(bytes) {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Serialized node is not valid UTF-8: {e}");
            String::new()
        }
    }
}
