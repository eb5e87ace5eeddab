//! Fuzzy "did you mean" fallback.

use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};
use crate::util::levenshtein::closest_match;

/// Last matcher before the UNKNOWN fallback: suggests the closest category
/// name for short, probably mistyped or misheard inputs.
///
/// Only transcripts of at most three words are considered, so long
/// utterances that are clearly not a category name skip the distance scan
/// entirely. The distance threshold tightens to 1 for inputs of up to four
/// characters.
#[derive(Debug, Default)]
pub struct SuggestionRule;

impl SuggestionRule {
    const MAX_TOKENS: usize = 3;

    /// Create a new suggestion rule.
    pub fn new() -> Self {
        SuggestionRule
    }
}

impl Rule for SuggestionRule {
    fn name(&self) -> &'static str {
        "suggestion"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if input.token_count > Self::MAX_TOKENS {
            return None;
        }

        let m = closest_match(input.text, input.config.categories.names())?;
        let threshold = if input.text.chars().count() <= 4 { 1 } else { 2 };
        if m.distance > threshold {
            return None;
        }

        Some(
            IntentResult::new(
                IntentKind::Suggestion,
                0.65,
                format!("Did you mean '{}'?", m.closest),
            )
            .with_category(m.closest),
        )
    }
}
