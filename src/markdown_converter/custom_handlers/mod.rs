//! Conversion rules for blog-export post content
//!
//! Rules registered here override htmd's default handling for the markup
//! the block editor and common embeds produce:
//! - Embeds (`tweet`, `codepen`, `script`, `iframe`): kept as raw HTML
//! - Figures (`figure`, `figcaption`): captioned figures keep explicit tags
//! - Code (`pre`): plain `<pre>` blocks become fenced code with a language
//! - Tables (`table`): table figures convert the nested table plus caption
//! - Video (`video`): YouTube embed figures become a player iframe
//!
//! Later rules take precedence, so the table and video rules shadow the
//! generic figure rule for the figures they recognize.

mod code_blocks;
mod embeds;
mod figures;
mod tables;
mod video;

use std::sync::{Arc, LazyLock};

use super::rule_registry::RuleRegistry;

static SHARED_RULES: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| Arc::new(wordpress_rules()));

/// Build the blog-export rule set in precedence order.
#[must_use]
pub fn wordpress_rules() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(embeds::TWEET);
    registry.register(embeds::CODEPEN);
    registry.register(embeds::SCRIPT);
    registry.register(embeds::IFRAME);
    registry.register(figures::FIGURE);
    registry.register(figures::FIGCAPTION);
    registry.register(code_blocks::PRE);
    registry.register(tables::TABLE);
    registry.register(video::VIDEO);
    registry
}

/// Process-wide rule set, built on first use.
#[must_use]
pub fn shared_rules() -> Arc<RuleRegistry> {
    Arc::clone(&SHARED_RULES)
}
