//! YouTube embed figures (`figure.wp-block-embed-youtube`).
//!
//! The block editor stores only the video URL as text inside the embed
//! wrapper. It is turned back into a standard player iframe.

use htmd::Element;
use htmd::element_handler::Handlers;
use markup5ever_rcdom::Node;
use regex::Regex;
use std::rc::Rc;
use std::sync::LazyLock;

use crate::markdown_converter::node_util::{
    extract_raw_text, find_descendant, has_class, node_has_class,
};
use crate::markdown_converter::rule_registry::Rule;
use crate::utils::{EMBED_WRAPPER_CLASS, YOUTUBE_EMBED_BASE, YOUTUBE_FIGURE_CLASS};

/// `https://www.youtube.com/watch?v=ID&...`
static WATCH_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"watch\?v=([A-Za-z0-9_-]+)").expect("WATCH_URL_RE: hardcoded regex is valid")
});

/// `https://youtu.be/ID?...`
static SHORT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").expect("SHORT_URL_RE: hardcoded regex is valid")
});

pub(super) const VIDEO: Rule = Rule {
    name: "video",
    tags: &["figure"],
    filter: is_youtube_figure,
    replacement: video_replacement,
};

fn is_youtube_figure(element: &Element) -> bool {
    has_class(element.attrs, YOUTUBE_FIGURE_CLASS)
}

/// Video id from a watch or short-link URL.
pub(crate) fn extract_youtube_id(url: &str) -> Option<&str> {
    WATCH_URL_RE
        .captures(url)
        .or_else(|| SHORT_URL_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn youtube_iframe(id: &str) -> String {
    format!(
        "<iframe width=\"560\" height=\"315\" src=\"{YOUTUBE_EMBED_BASE}{id}\" \
         title=\"YouTube video player\" frameborder=\"0\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share\" \
         referrerpolicy=\"strict-origin-when-cross-origin\" allowfullscreen></iframe>"
    )
}

/// Unrecognized URLs keep the converted children instead.
fn video_replacement(_handlers: &dyn Handlers, content: &str, element: &Element) -> String {
    let is_wrapper = |node: &Rc<Node>| node_has_class(node, EMBED_WRAPPER_CLASS);
    let url = find_descendant(element.node, &is_wrapper)
        .map(|wrapper| extract_raw_text(&wrapper).trim().to_string())
        .unwrap_or_default();

    match extract_youtube_id(&url) {
        Some(id) => format!("\n\n{}\n\n", youtube_iframe(id)),
        None => {
            tracing::debug!(url = %url, "No video id in embed URL, keeping children");
            content.to_string()
        }
    }
}
