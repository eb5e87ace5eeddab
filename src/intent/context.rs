//! Caller-supplied conversation context.

use serde::{Deserialize, Serialize};

use crate::intent::kind::IntentKind;

/// Memory of the previous turn, supplied by the caller on every call.
///
/// The engine is stateless and never stores context between calls; this
/// struct only influences the contextual follow-up rule and is otherwise
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Intent returned by the previous interpretation, if any.
    pub last_intent: Option<IntentKind>,
    /// Entity (category name) resolved by the previous interpretation.
    pub last_entity: Option<String>,
}

impl ConversationContext {
    /// An empty context, equivalent to `Default`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying the previous turn's intent and entity.
    pub fn with_turn(last_intent: IntentKind, last_entity: Option<String>) -> Self {
        ConversationContext {
            last_intent: Some(last_intent),
            last_entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let ctx = ConversationContext::new();
        assert_eq!(ctx.last_intent, None);
        assert_eq!(ctx.last_entity, None);
    }

    #[test]
    fn test_with_turn() {
        let ctx = ConversationContext::with_turn(IntentKind::Category, Some("cement".to_string()));
        assert_eq!(ctx.last_intent, Some(IntentKind::Category));
        assert_eq!(ctx.last_entity.as_deref(), Some("cement"));
    }
}
