//! Free-text search matching.

use regex::Regex;

use crate::analysis::normalizer::title_case;
use crate::error::{DragomanError, Result};
use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Matches explicit search requests and routes them to the materials
/// listing.
///
/// A trailing "in <location>" suffix is split off as a location filter. A
/// query that exactly names a category (or "suppliers for" one) is
/// reclassified as a category lookup rather than a generic search.
#[derive(Debug)]
pub struct SearchRule {
    pattern: Regex,
}

impl SearchRule {
    /// Create a new search rule.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"^(?:search for|find|show me|looking for)\s+(.+)$")
            .map_err(|e| DragomanError::pattern(e.to_string()))?;
        Ok(SearchRule { pattern })
    }

    /// Split a trailing " in <location>" suffix off the query.
    fn split_location(rest: &str) -> (&str, Option<&str>) {
        if let Some(idx) = rest.rfind(" in ") {
            let query = rest[..idx].trim_end();
            let location = rest[idx + 4..].trim();
            if !query.is_empty() && !location.is_empty() {
                return (query, Some(location));
            }
        }
        (rest, None)
    }

    fn category_lookup(
        input: &RuleInput<'_>,
        raw_query: &str,
        location: Option<&str>,
    ) -> Option<IntentResult> {
        let category = input.config.categories.iter().find(|cat| {
            raw_query == *cat || raw_query == format!("suppliers for {cat}").as_str()
        })?;
        let display = title_case(category);

        let mut route = format!("/customer/category/{}", urlencoding::encode(&display));
        let message = match location {
            Some(loc) => {
                route.push_str(&format!("?location={}", urlencoding::encode(loc)));
                format!("Showing {display} in {loc}.")
            }
            None => format!("Showing {display}."),
        };

        Some(
            IntentResult::new(IntentKind::Category, 0.95, message)
                .with_route(route)
                .with_category(category),
        )
    }
}

impl Rule for SearchRule {
    fn name(&self) -> &'static str {
        "search"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        let caps = self.pattern.captures(input.text)?;
        let rest = caps.get(1)?.as_str().trim();
        let (raw_query, location) = Self::split_location(rest);

        if raw_query.is_empty() {
            return None;
        }

        if let Some(result) = Self::category_lookup(input, raw_query, location) {
            return Some(result);
        }

        let mut route = format!("/materials?search={}", urlencoding::encode(raw_query));
        let message = match location {
            Some(loc) => {
                route.push_str(&format!("&location={}", urlencoding::encode(loc)));
                format!("Searching for {raw_query} in {loc}.")
            }
            None => format!("Searching for {raw_query}."),
        };

        Some(
            IntentResult::new(IntentKind::Search, 0.93, message)
                .with_route(route)
                .with_query(raw_query),
        )
    }
}
