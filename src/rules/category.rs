//! Category listing matching.

use crate::analysis::normalizer::title_case;
use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Matches a category name spoken anywhere in the transcript.
///
/// Browse prefixes like "show me" or "looking for" are permitted but carry
/// no weight: the decisive test is containment of a category name in the
/// full normalized text, checked in vocabulary order with the first hit
/// winning.
#[derive(Debug, Default)]
pub struct CategoryRule;

impl CategoryRule {
    /// Create a new category rule.
    pub fn new() -> Self {
        CategoryRule
    }
}

impl Rule for CategoryRule {
    fn name(&self) -> &'static str {
        "category"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        let category = input.config.categories.first_contained_in(input.text)?;
        let display = title_case(category);

        Some(
            IntentResult::new(IntentKind::Category, 0.94, format!("Showing {display}."))
                .with_route(format!(
                    "/customer/category/{}",
                    urlencoding::encode(&display)
                ))
                .with_category(category),
        )
    }
}
