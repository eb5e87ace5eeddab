//! Compound and ambiguous action matchers: cart operations and issue
//! reporting.

use regex::Regex;

use crate::error::{DragomanError, Result};
use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Page prefixes on which a spoken "add to cart" can act.
const CART_ELIGIBLE_PREFIXES: &[&str] = &["/product/", "/category/", "/customer/product/"];

/// Catches "add <phrase> to cart" where the phrase names a whole category.
///
/// Checked before the generic add-to-cart rule so category-qualified
/// requests are disambiguated instead of blindly accepted: "add cement to
/// cart" cannot identify a product, so the user is asked which one.
#[derive(Debug)]
pub struct AmbiguousCartRule {
    pattern: Regex,
}

impl AmbiguousCartRule {
    /// Create a new ambiguous add-to-cart rule.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"add\s+(.+?)\s+(?:to|in)\s+(?:cart|bag|basket)")
            .map_err(|e| DragomanError::pattern(e.to_string()))?;
        Ok(AmbiguousCartRule { pattern })
    }
}

impl Rule for AmbiguousCartRule {
    fn name(&self) -> &'static str {
        "ambiguous_add_to_cart"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        let caps = self.pattern.captures(input.text)?;
        let potential = caps.get(1)?.as_str().trim();
        let category = input.config.categories.first_contained_in(potential)?;

        Some(
            IntentResult::new(
                IntentKind::Clarification,
                0.85,
                format!("Which {category} product did you have in mind?"),
            )
            .with_category(category),
        )
    }
}

/// Generic add-to-cart, gated by the current page.
///
/// Valid only on product and category pages. Off those pages the intent is
/// still recognized but degrades to HELP explaining the constraint.
#[derive(Debug, Default)]
pub struct AddToCartRule;

impl AddToCartRule {
    /// Create a new add-to-cart rule.
    pub fn new() -> Self {
        AddToCartRule
    }

    fn path_is_eligible(path: Option<&str>) -> bool {
        path.is_some_and(|p| {
            CART_ELIGIBLE_PREFIXES
                .iter()
                .any(|prefix| p.starts_with(prefix))
        })
    }
}

impl Rule for AddToCartRule {
    fn name(&self) -> &'static str {
        "add_to_cart"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if !input.text.contains("add to cart") && !input.text.contains("buy this") {
            return None;
        }

        if Self::path_is_eligible(input.current_path) {
            Some(IntentResult::new(
                IntentKind::AddToCart,
                0.88,
                "Adding this item to your cart.",
            ))
        } else {
            Some(IntentResult::new(
                IntentKind::Help,
                0.60,
                "Items can be added from a product or category page. Open one first, then say 'add to cart'.",
            ))
        }
    }
}

/// Clear-cart matching.
///
/// The caller is expected to confirm before acting; the follow-up "yes" or
/// "no" arrives as a separate call handled by the confirmation rule.
#[derive(Debug, Default)]
pub struct ClearCartRule;

impl ClearCartRule {
    const PHRASES: &'static [&'static str] = &[
        "clear cart",
        "empty cart",
        "remove all items",
        "empty basket",
    ];

    /// Create a new clear-cart rule.
    pub fn new() -> Self {
        ClearCartRule
    }
}

impl Rule for ClearCartRule {
    fn name(&self) -> &'static str {
        "clear_cart"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if Self::PHRASES.iter().any(|p| input.text.contains(p)) {
            return Some(IntentResult::new(
                IntentKind::ClearCart,
                0.95,
                "This removes every item from your cart. Say 'yes' to confirm.",
            ));
        }
        None
    }
}

/// Bug report and feedback matching.
#[derive(Debug, Default)]
pub struct ReportIssueRule;

impl ReportIssueRule {
    const PHRASES: &'static [&'static str] =
        &["report bug", "report issue", "feedback", "not working"];

    /// Create a new report-issue rule.
    pub fn new() -> Self {
        ReportIssueRule
    }
}

impl Rule for ReportIssueRule {
    fn name(&self) -> &'static str {
        "report_issue"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if Self::PHRASES.iter().any(|p| input.text.contains(p)) {
            return Some(IntentResult::new(
                IntentKind::ReportIssue,
                0.95,
                "Thanks for flagging that. Your report has been passed along.",
            ));
        }
        None
    }
}
