//! Third-party embeds passed through as raw HTML.
//!
//! Tweets, CodePen pens, scripts and iframes have no Markdown form. The
//! original markup is kept so the published page still renders the widget.

use htmd::Element;
use htmd::element_handler::Handlers;

use crate::markdown_converter::node_util::{
    has_attr, has_class, is_text_node, outer_html, previous_sibling,
};
use crate::markdown_converter::rule_registry::Rule;
use crate::utils::{CODEPEN_CLASS, CODEPEN_SLUG_ATTR, TWEET_CLASS};

pub(super) const TWEET: Rule = Rule {
    name: "tweet",
    tags: &["blockquote"],
    filter: is_tweet,
    replacement: passthrough,
};

pub(super) const CODEPEN: Rule = Rule {
    name: "codepen",
    tags: &["p", "div"],
    filter: is_codepen,
    replacement: passthrough,
};

pub(super) const SCRIPT: Rule = Rule {
    name: "script",
    tags: &["script"],
    filter: any_element,
    replacement: script_replacement,
};

pub(super) const IFRAME: Rule = Rule {
    name: "iframe",
    tags: &["iframe"],
    filter: any_element,
    replacement: iframe_replacement,
};

fn any_element(_element: &Element) -> bool {
    true
}

fn is_tweet(element: &Element) -> bool {
    has_class(element.attrs, TWEET_CLASS)
}

fn is_codepen(element: &Element) -> bool {
    has_attr(element.attrs, CODEPEN_SLUG_ATTR) && has_class(element.attrs, CODEPEN_CLASS)
}

fn passthrough(_handlers: &dyn Handlers, _content: &str, element: &Element) -> String {
    format!("\n\n{}\n\n", outer_html(element.node))
}

/// Scripts right after an element (usually the embed they power) stay snug
/// against it; anywhere else they get a full blank line.
fn script_replacement(_handlers: &dyn Handlers, _content: &str, element: &Element) -> String {
    let prefix = match previous_sibling(element.node) {
        Some(sibling) if !is_text_node(&sibling) => "\n",
        _ => "\n\n",
    };
    let html = outer_html(element.node).replacen("async=\"\"", "async", 1);
    format!("{prefix}{html}\n\n")
}

fn iframe_replacement(_handlers: &dyn Handlers, _content: &str, element: &Element) -> String {
    let html = outer_html(element.node)
        .replacen("allowfullscreen=\"\"", "allowfullscreen", 1)
        .replacen("allowpaymentrequest=\"\"", "allowpaymentrequest", 1);
    format!("\n\n{html}\n\n")
}

#[cfg(test)]
mod tests {
    use crate::markdown_converter::MarkdownConverter;

    fn convert(html: &str) -> String {
        MarkdownConverter::new().convert(html).unwrap()
    }

    #[test]
    fn test_tweet_kept_as_html() {
        let md = convert(
            r#"<blockquote class="twitter-tweet"><p>Hello <a href="https://t.co/x">world</a></p></blockquote>"#,
        );
        assert!(md.starts_with(r#"<blockquote class="twitter-tweet">"#), "Got: {md}");
        assert!(md.contains(r#"<a href="https://t.co/x">world</a>"#), "Got: {md}");
        assert!(md.ends_with("</blockquote>"), "Got: {md}");
    }

    #[test]
    fn test_plain_blockquote_converted() {
        let md = convert("<blockquote><p>quoted</p></blockquote>");
        assert_eq!(md, "> quoted");
    }

    #[test]
    fn test_codepen_needs_slug_and_class() {
        let md = convert(r#"<p class="codepen" data-slug-hash="abc">See the pen</p>"#);
        assert!(md.contains(r#"data-slug-hash="abc""#), "Got: {md}");

        let md = convert(r#"<p class="codepen">See the pen</p>"#);
        assert_eq!(md, "See the pen");
    }

    #[test]
    fn test_script_async_attribute_normalized() {
        let md = convert(r#"<p>intro</p><script async src="https://x.test/w.js"></script>"#);
        assert!(md.contains(r#"<script async src="https://x.test/w.js"></script>"#), "Got: {md}");
        assert!(!md.contains("async=\"\""), "Got: {md}");
    }

    #[test]
    fn test_script_after_element_gets_single_newline() {
        let md = convert(r##"<p><a href="#">x</a><script async src="w.js"></script></p>"##);
        assert_eq!(md, "[x](#)\n<script async src=\"w.js\"></script>");
    }

    #[test]
    fn test_script_after_text_gets_blank_line() {
        let md = convert(r#"<p>text<script async src="w.js"></script></p>"#);
        assert_eq!(md, "text\n\n<script async src=\"w.js\"></script>");
    }

    #[test]
    fn test_iframe_boolean_attributes_normalized() {
        let md = convert(
            r#"<iframe src="https://x.test/e" allowfullscreen allowpaymentrequest></iframe>"#,
        );
        assert_eq!(
            md,
            r#"<iframe src="https://x.test/e" allowfullscreen allowpaymentrequest></iframe>"#
        );
    }

    #[test]
    fn test_iframe_padded_by_blank_lines() {
        let md = convert(r#"<p>before</p><iframe src="https://x.test/e"></iframe><p>after</p>"#);
        assert!(
            md.contains("before\n\n<iframe src=\"https://x.test/e\"></iframe>\n\nafter"),
            "Got: {md}"
        );
    }
}
