//! Help and capability questions.

use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Guidance listing example commands.
pub const HELP_MESSAGE: &str =
    "Try 'go to cart', 'show me cement', 'search for pipes', or 'track my order'.";

/// Matches requests for usage guidance.
#[derive(Debug, Default)]
pub struct HelpRule;

impl HelpRule {
    /// Create a new help rule.
    pub fn new() -> Self {
        HelpRule
    }
}

impl Rule for HelpRule {
    fn name(&self) -> &'static str {
        "help"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if input.text.contains("help") || input.text.contains("what can you do") {
            return Some(IntentResult::new(IntentKind::Help, 0.90, HELP_MESSAGE));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::ConversationContext;
    use crate::vocabulary::InterpreterConfig;

    fn evaluate(text: &str) -> Option<IntentResult> {
        let context = ConversationContext::default();
        let config = InterpreterConfig::default();
        HelpRule::new().evaluate(&RuleInput {
            text,
            token_count: text.split_whitespace().count(),
            current_path: None,
            context: &context,
            config: &config,
        })
    }

    #[test]
    fn test_help_phrases() {
        for text in ["help", "i need some help here", "what can you do"] {
            let result = evaluate(text).unwrap();
            assert_eq!(result.intent, IntentKind::Help);
            assert_eq!(result.confidence, 0.90);
            assert_eq!(result.message, HELP_MESSAGE);
        }
    }

    #[test]
    fn test_other_text_declines() {
        assert!(evaluate("hello there").is_none());
    }
}
