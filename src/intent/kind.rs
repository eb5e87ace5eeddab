//! The closed set of intent classifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DragomanError;

/// Classification label describing what the user wants.
///
/// This is a closed enumeration; every interpretation resolves to exactly
/// one of these kinds. Serialized labels use the wire-level form consumed by
/// callers (`ADD_TO_CART`, `NAVIGATE_BACK`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    /// Affirmative answer to a pending prompt.
    Confirm,
    /// Negative answer to a pending prompt.
    Deny,
    /// Re-sort the previously shown listing.
    SortAction,
    /// Recognized action that needs a more specific product choice.
    Clarification,
    /// Add the current product to the cart.
    AddToCart,
    /// Remove every item from the cart.
    ClearCart,
    /// User wants to report a problem or leave feedback.
    ReportIssue,
    /// Navigate to a known route.
    Navigate,
    /// Navigate to the previous page.
    NavigateBack,
    /// Open a product category listing.
    Category,
    /// Free-text product search.
    Search,
    /// Check on a placed order.
    OrderStatus,
    /// Show usage guidance.
    Help,
    /// Probable typo; a close vocabulary match needs confirmation.
    Suggestion,
    /// No rule matched.
    Unknown,
}

impl IntentKind {
    /// The wire-level label for this intent kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Confirm => "CONFIRM",
            IntentKind::Deny => "DENY",
            IntentKind::SortAction => "SORT_ACTION",
            IntentKind::Clarification => "CLARIFICATION",
            IntentKind::AddToCart => "ADD_TO_CART",
            IntentKind::ClearCart => "CLEAR_CART",
            IntentKind::ReportIssue => "REPORT_ISSUE",
            IntentKind::Navigate => "NAVIGATE",
            IntentKind::NavigateBack => "NAVIGATE_BACK",
            IntentKind::Category => "CATEGORY",
            IntentKind::Search => "SEARCH",
            IntentKind::OrderStatus => "ORDER_STATUS",
            IntentKind::Help => "HELP",
            IntentKind::Suggestion => "SUGGESTION",
            IntentKind::Unknown => "UNKNOWN",
        }
    }

    /// All intent kinds, in declaration order.
    pub fn all() -> &'static [IntentKind] {
        &[
            IntentKind::Confirm,
            IntentKind::Deny,
            IntentKind::SortAction,
            IntentKind::Clarification,
            IntentKind::AddToCart,
            IntentKind::ClearCart,
            IntentKind::ReportIssue,
            IntentKind::Navigate,
            IntentKind::NavigateBack,
            IntentKind::Category,
            IntentKind::Search,
            IntentKind::OrderStatus,
            IntentKind::Help,
            IntentKind::Suggestion,
            IntentKind::Unknown,
        ]
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentKind {
    type Err = DragomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentKind::all()
            .iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| DragomanError::config(format!("unknown intent kind: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels() {
        assert_eq!(IntentKind::AddToCart.as_str(), "ADD_TO_CART");
        assert_eq!(IntentKind::NavigateBack.as_str(), "NAVIGATE_BACK");
        assert_eq!(IntentKind::SortAction.to_string(), "SORT_ACTION");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&IntentKind::OrderStatus).unwrap();
        assert_eq!(json, "\"ORDER_STATUS\"");

        let kind: IntentKind = serde_json::from_str("\"CLEAR_CART\"").unwrap();
        assert_eq!(kind, IntentKind::ClearCart);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("CATEGORY".parse::<IntentKind>().unwrap(), IntentKind::Category);
        assert_eq!("category".parse::<IntentKind>().unwrap(), IntentKind::Category);
        assert!("MYSTERY".parse::<IntentKind>().is_err());
    }

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(IntentKind::all().len(), 15);
    }
}
