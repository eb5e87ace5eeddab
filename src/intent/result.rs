//! The structured result of one interpretation.

use serde::{Deserialize, Serialize};

use crate::intent::kind::IntentKind;

/// Guidance shown when the transcript was empty.
pub const EMPTY_TRANSCRIPT_MESSAGE: &str =
    "I didn't catch that. Try a command like 'go to cart' or 'show me cement'.";

/// Guidance shown when no rule matched.
pub const NO_MATCH_MESSAGE: &str =
    "Sorry, I didn't understand that. Say 'help' to hear what you can ask for.";

/// The sole output type of the engine.
///
/// Constructed fresh on every call and immediately consumed by the caller.
/// A router navigates to `route` when it is set, a UI layer displays
/// `message`, and `confidence` is a heuristic scalar in `[0, 1]` (not a
/// probability) that low-confidence consumers use to seek clarification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// What the user wants.
    pub intent: IntentKind,
    /// Route for the caller's router to navigate to, when one applies.
    pub route: Option<String>,
    /// Free-text search query, for SEARCH results.
    pub query: Option<String>,
    /// Matched category name, always a member of the configured vocabulary.
    pub category: Option<String>,
    /// How certain the matching rule is, in `[0, 1]`.
    pub confidence: f64,
    /// Human-readable response for the UI layer.
    pub message: String,
    /// Sort directive for SORT_ACTION results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl IntentResult {
    /// Create a result with no route, query, category, or sort directive.
    pub fn new<S: Into<String>>(intent: IntentKind, confidence: f64, message: S) -> Self {
        IntentResult {
            intent,
            route: None,
            query: None,
            category: None,
            confidence,
            message: message.into(),
            sort_by: None,
        }
    }

    /// Set the route.
    pub fn with_route<S: Into<String>>(mut self, route: S) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set the search query.
    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the matched category.
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sort directive.
    pub fn with_sort_by<S: Into<String>>(mut self, sort_by: S) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// The result returned for an empty transcript. The rule chain is never
    /// consulted for this case.
    pub fn empty_transcript() -> Self {
        IntentResult::new(IntentKind::Unknown, 0.0, EMPTY_TRANSCRIPT_MESSAGE)
    }

    /// The result returned when every rule declined the input.
    pub fn no_match() -> Self {
        IntentResult::new(IntentKind::Unknown, 0.40, NO_MATCH_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let result = IntentResult::new(IntentKind::Category, 0.94, "Showing Cement.")
            .with_route("/customer/category/Cement")
            .with_category("cement");

        assert_eq!(result.intent, IntentKind::Category);
        assert_eq!(result.route.as_deref(), Some("/customer/category/Cement"));
        assert_eq!(result.category.as_deref(), Some("cement"));
        assert_eq!(result.query, None);
        assert_eq!(result.sort_by, None);
    }

    #[test]
    fn test_fallback_results() {
        let empty = IntentResult::empty_transcript();
        assert_eq!(empty.intent, IntentKind::Unknown);
        assert_eq!(empty.confidence, 0.0);

        let miss = IntentResult::no_match();
        assert_eq!(miss.intent, IntentKind::Unknown);
        assert_eq!(miss.confidence, 0.40);
    }

    #[test]
    fn test_sort_by_omitted_from_json_when_absent() {
        let result = IntentResult::new(IntentKind::Confirm, 0.99, "Confirmed.");
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("sort_by"));

        let sorted = IntentResult::new(IntentKind::SortAction, 0.90, "Sorting.")
            .with_sort_by("price_asc");
        let json = serde_json::to_string(&sorted).unwrap();
        assert!(json.contains("\"sort_by\":\"price_asc\""));
    }
}
