//! Contextual follow-up resolution.

use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Resolves comparative-price follow-ups to the previous turn's category.
///
/// Fires only when the previous turn resolved a category and the caller
/// passed that turn back in the context. This is the engine's only
/// cross-call dependency, and all of its state arrives with the call.
#[derive(Debug, Default)]
pub struct FollowUpRule;

impl FollowUpRule {
    /// Create a new follow-up rule.
    pub fn new() -> Self {
        FollowUpRule
    }
}

impl Rule for FollowUpRule {
    fn name(&self) -> &'static str {
        "contextual_followup"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if input.context.last_intent != Some(IntentKind::Category) {
            return None;
        }
        let entity = input.context.last_entity.as_deref()?;

        if input.text.contains("cheaper") || input.text.contains("cheapest") {
            return Some(
                IntentResult::new(
                    IntentKind::SortAction,
                    0.90,
                    format!("Sorting {entity} by lowest price."),
                )
                .with_category(entity)
                .with_sort_by("price_asc"),
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::ConversationContext;
    use crate::vocabulary::InterpreterConfig;

    fn evaluate(text: &str, context: &ConversationContext) -> Option<IntentResult> {
        let config = InterpreterConfig::default();
        FollowUpRule::new().evaluate(&RuleInput {
            text,
            token_count: text.split_whitespace().count(),
            current_path: None,
            context,
            config: &config,
        })
    }

    fn category_context() -> ConversationContext {
        ConversationContext::with_turn(IntentKind::Category, Some("cement".to_string()))
    }

    #[test]
    fn test_cheaper_follow_up() {
        let result = evaluate("show me cheaper options", &category_context()).unwrap();
        assert_eq!(result.intent, IntentKind::SortAction);
        assert_eq!(result.confidence, 0.90);
        assert_eq!(result.category.as_deref(), Some("cement"));
        assert_eq!(result.sort_by.as_deref(), Some("price_asc"));
    }

    #[test]
    fn test_cheapest_follow_up() {
        let result = evaluate("which is the cheapest", &category_context()).unwrap();
        assert_eq!(result.intent, IntentKind::SortAction);
    }

    #[test]
    fn test_requires_category_context() {
        // No context at all
        assert!(evaluate("cheaper", &ConversationContext::default()).is_none());

        // Wrong previous intent
        let ctx = ConversationContext::with_turn(IntentKind::Search, Some("cement".to_string()));
        assert!(evaluate("cheaper", &ctx).is_none());

        // Category intent but no entity
        let ctx = ConversationContext::with_turn(IntentKind::Category, None);
        assert!(evaluate("cheaper", &ctx).is_none());
    }

    #[test]
    fn test_requires_comparative_phrase() {
        assert!(evaluate("show me more", &category_context()).is_none());
    }
}
