//! Tree-to-Markdown conversion with rule overrides.
//!
//! # Architecture
//!
//! `htmd` parses the fragment with `html5ever` and walks the tree, calling a
//! handler per element and stitching results together with its block newline
//! rules (at most one blank line between blocks). Every tag referenced by the
//! [`RuleRegistry`] is routed to one [`RuleDispatcher`]:
//!
//! 1. the dispatcher asks the registry for the most recent matching rule,
//! 2. on a hit, the element's children are converted and handed to the rule,
//! 3. on a miss, `htmd`'s own handler for the tag runs (`Handlers::fallback`).
//!
//! Each element is handled exactly once, in document order.

use htmd::element_handler::{ElementHandler, HandlerResult, Handlers};
use htmd::options::{BulletListMarker, CodeBlockStyle, HeadingStyle, Options};
use htmd::{Element, HtmlToMarkdown};
use std::sync::Arc;

use super::custom_handlers::shared_rules;
use super::errors::{ConversionError, ConversionResult};
use super::rule_registry::RuleRegistry;

/// Routes elements to the registry, falling back to `htmd` defaults.
struct RuleDispatcher {
    registry: Arc<RuleRegistry>,
}

impl ElementHandler for RuleDispatcher {
    fn handle(&self, handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
        let Some(rule) = self.registry.resolve(&element) else {
            return handlers.fallback(element);
        };

        tracing::trace!(rule = rule.name, tag = element.tag, "conversion rule matched");
        let children = handlers.walk_children(element.node).content;
        Some(HandlerResult::from((rule.replacement)(
            handlers, &children, &element,
        )))
    }
}

/// Baseline formatting: ATX headings, `-` bullets, fenced code.
fn baseline_options() -> Options {
    Options {
        heading_style: HeadingStyle::Atx,
        bullet_list_marker: BulletListMarker::Dash,
        code_block_style: CodeBlockStyle::Fenced,
        ..Default::default()
    }
}

/// HTML to Markdown tree converter layered with a rule registry
pub struct MarkdownConverter {
    registry: Arc<RuleRegistry>,
    converter: HtmlToMarkdown,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::with_registry(shared_rules())
    }
}

impl MarkdownConverter {
    /// Converter using the blog-export rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converter using a caller-supplied rule set.
    ///
    /// An empty registry yields plain `htmd` conversion.
    #[must_use]
    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        let mut builder = HtmlToMarkdown::builder().options(baseline_options());

        let tags = registry.tags();
        if !tags.is_empty() {
            builder = builder.add_handler(
                tags,
                RuleDispatcher {
                    registry: Arc::clone(&registry),
                },
            );
        }

        Self {
            registry,
            converter: builder.build(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Convert an HTML fragment to Markdown.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Parse` if `htmd` cannot read the fragment.
    pub fn convert(&self, html: &str) -> ConversionResult<String> {
        let markdown = self
            .converter
            .convert(html)
            .map_err(|e| ConversionError::Parse(e.to_string()))?;
        Ok(markdown.trim().to_string())
    }
}
