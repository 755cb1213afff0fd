//! Ordered registry of conversion rules.
//!
//! A rule overrides the baseline conversion of the elements it matches.
//! Precedence is registration order: when several rules match the same
//! element, the one registered last wins. There is no priority field and no
//! removal; a registry is built once and shared read-only.

use htmd::Element;
use htmd::element_handler::Handlers;
use std::fmt;

/// Decides whether a rule applies to an element whose tag is in the rule's tag list.
pub type RuleFilter = fn(&Element) -> bool;

/// Produces the replacement text for a matched element.
///
/// Receives the handler set (for recursive conversion of sub-trees), the
/// already-converted children, and the element itself.
pub type RuleReplacement = fn(&dyn Handlers, &str, &Element) -> String;

/// A named `(filter, replacement)` pair scoped to a set of tags.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    /// Tags the rule can apply to. The tree converter dispatches by tag, so
    /// this is the cheap pre-filter before `filter` runs.
    pub tags: &'static [&'static str],
    pub filter: RuleFilter,
    pub replacement: RuleReplacement,
}

impl Rule {
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        self.tags.contains(&element.tag) && (self.filter)(element)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Registration-ordered rule collection
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. It takes precedence over every rule registered before it.
    ///
    /// # Panics
    ///
    /// Panics if the rule has no tags; such a rule could never be dispatched.
    pub fn register(&mut self, rule: Rule) {
        assert!(!rule.tags.is_empty(), "rule '{}' has no tags", rule.name);
        self.rules.push(rule);
    }

    /// Most recently registered rule matching `element`, or `None` when the
    /// baseline conversion should apply.
    #[must_use]
    pub fn resolve(&self, element: &Element) -> Option<&Rule> {
        self.rules.iter().rev().find(|rule| rule.matches(element))
    }

    /// Distinct tags referenced by any rule, in first-registration order.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = Vec::new();
        for tag in self.rules.iter().flat_map(|rule| rule.tags.iter().copied()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
