//! Confirmation and denial matching.

use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Exact-membership test against the affirmative and negative phrase sets.
///
/// This rule has top priority: a bare "yes" or "no" is always an answer to
/// a pending prompt, never a navigation or search request.
#[derive(Debug, Default)]
pub struct ConfirmationRule;

impl ConfirmationRule {
    /// Create a new confirmation rule.
    pub fn new() -> Self {
        ConfirmationRule
    }
}

impl Rule for ConfirmationRule {
    fn name(&self) -> &'static str {
        "confirmation"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if input.config.phrases.is_affirmative(input.text) {
            return Some(IntentResult::new(IntentKind::Confirm, 0.99, "Confirmed."));
        }
        if input.config.phrases.is_negative(input.text) {
            return Some(IntentResult::new(IntentKind::Deny, 0.99, "Cancelled."));
        }
        None
    }
}
