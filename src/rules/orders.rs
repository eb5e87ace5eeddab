//! Order status matching.

use crate::intent::{IntentKind, IntentResult};
use crate::rules::chain::{Rule, RuleInput};

/// Matches questions about a placed order and routes to order tracking.
#[derive(Debug, Default)]
pub struct OrderStatusRule;

impl OrderStatusRule {
    const PHRASES: &'static [&'static str] =
        &["where is my order", "track my order", "order status"];

    /// Create a new order-status rule.
    pub fn new() -> Self {
        OrderStatusRule
    }
}

impl Rule for OrderStatusRule {
    fn name(&self) -> &'static str {
        "order_status"
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult> {
        if Self::PHRASES.iter().any(|p| input.text.contains(p)) {
            return Some(
                IntentResult::new(IntentKind::OrderStatus, 0.92, "Opening order tracking.")
                    .with_route("/customer/order-tracking"),
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

    fn evaluate(text: &str) -> Option<IntentResult> {
        let context = ConversationContext::default();
        let config = InterpreterConfig::default();
        OrderStatusRule::new().evaluate(&RuleInput {
            text,
            token_count: text.split_whitespace().count(),
            current_path: None,
            context: &context,
            config: &config,
        })
    }

    #[test]
    fn test_order_status_phrases() {
        for text in [
            "where is my order",
            "can you track my order please",
            "what is the order status",
        ] {
            let result = evaluate(text).unwrap();
            assert_eq!(result.intent, IntentKind::OrderStatus);
            assert_eq!(result.confidence, 0.92);
            assert_eq!(result.route.as_deref(), Some("/customer/order-tracking"));
        }
    }

    #[test]
    fn test_unrelated_order_talk_declines() {
        assert!(evaluate("i would like to order").is_none());
    }
}
