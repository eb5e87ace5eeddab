//! Route navigation matching.

use regex::Regex;

use crate::error::{DragomanError, Result};
use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};
use crate::vocabulary::RouteEntry;

/// Matches navigation requests against the route keyword table.
///
/// Three sub-strategies, tried in order:
/// 1. verb-prefixed navigation ("go to cart", "open my orders"), matching
///    the captured target against every route key with bidirectional
///    substring containment, first table entry wins;
/// 2. back navigation ("go back", "back", "return");
/// 3. a bare route name spoken on its own ("cart", "my orders"), which earns
///    higher confidence than the fuzzy verb-prefixed form.
#[derive(Debug)]
pub struct NavigationRule {
    verb_pattern: Regex,
}

impl NavigationRule {
    /// Create a new navigation rule.
    pub fn new() -> Result<Self> {
        // "show me" must precede "show" in the alternation
        let verb_pattern = Regex::new(r"^(?:go to|open|show me|show|navigate to|view)\s+(.+)$")
            .map_err(|e| DragomanError::pattern(e.to_string()))?;
        Ok(NavigationRule { verb_pattern })
    }

    fn verb_prefixed(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        let caps = self.verb_pattern.captures(input.text)?;
        let target = caps.get(1)?.as_str().trim();

        let entry = input
            .config
            .routes
            .iter()
            .find(|entry| target.contains(&entry.key) || entry.key.contains(target))?;

        Some(Self::navigate_to(entry, 0.95))
    }

    fn back(input: &RuleInput<'_>) -> Option<IntentResult> {
        if matches!(input.text, "go back" | "back" | "return") {
            return Some(IntentResult::new(
                IntentKind::NavigateBack,
                0.95,
                "Going back.",
            ));
        }
        None
    }

    fn bare_route(input: &RuleInput<'_>) -> Option<IntentResult> {
        let routes = &input.config.routes;
        let entry = routes.exact(input.text).or_else(|| {
            input
                .text
                .strip_prefix("my ")
                .and_then(|stripped| routes.exact(stripped))
        })?;

        Some(Self::navigate_to(entry, 0.98))
    }

    fn navigate_to(entry: &RouteEntry, confidence: f64) -> IntentResult {
        IntentResult::new(
            IntentKind::Navigate,
            confidence,
            format!("Taking you to {}.", entry.key),
        )
        .with_route(entry.path.clone())
    }
}

impl Rule for NavigationRule {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        self.verb_prefixed(input)
            .or_else(|| Self::back(input))
            .or_else(|| Self::bare_route(input))
    }
}
