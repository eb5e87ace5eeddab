//! The interpreter: normalization, rule chain, and vocabulary tables bound
//! together behind one call.

use crate::analysis::normalizer::{normalize, token_count};
use crate::error::Result;
use crate::intent::{ConversationContext, IntentResult};
use crate::rules::chain::{RuleChain, RuleInput};
use crate::vocabulary::InterpreterConfig;

/// Rule-based transcript interpreter.
///
/// Construction compiles the rule patterns and validates the vocabulary;
/// after that, [`Interpreter::interpret`] is a pure, synchronous function
/// with no I/O and no interior mutability, safe to call concurrently from
/// any number of threads. Identical arguments always produce identical
/// results.
#[derive(Debug)]
pub struct Interpreter {
    config: InterpreterConfig,
    chain: RuleChain,
}

impl Interpreter {
    /// Create an interpreter with the built-in storefront vocabulary.
    pub fn new() -> Result<Self> {
        Self::with_config(InterpreterConfig::default())
    }

    /// Create an interpreter with the given vocabulary configuration.
    pub fn with_config(config: InterpreterConfig) -> Result<Self> {
        Ok(Interpreter {
            config,
            chain: RuleChain::standard()?,
        })
    }

    /// The vocabulary configuration in use.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.chain.rule_names()
    }

    /// Interpret one transcript, producing exactly one result.
    ///
    /// `current_path` is the caller's current UI route, consulted only by
    /// the add-to-cart gate. `context` carries the previous turn's intent
    /// and entity; pass a default context when there was no previous turn.
    /// This function is total: malformed or nonsensical input yields an
    /// UNKNOWN result, never an error.
    pub fn interpret(
        &self,
        transcript: &str,
        current_path: Option<&str>,
        context: &ConversationContext,
    ) -> IntentResult {
        let text = normalize(transcript);
        if text.is_empty() {
            log::debug!("empty transcript, skipping rule chain");
            return IntentResult::empty_transcript();
        }

        let input = RuleInput {
            text: &text,
            token_count: token_count(&text),
            current_path,
            context,
            config: &self.config,
        };
        self.chain.evaluate(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentKind;

    #[test]
    fn test_empty_transcript_skips_chain() {
        let interpreter = Interpreter::new().unwrap();
        let context = ConversationContext::default();

        for transcript in ["", "   ", "\t\n"] {
            let result = interpreter.interpret(transcript, None, &context);
            assert_eq!(result.intent, IntentKind::Unknown);
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn test_input_is_normalized_before_matching() {
        let interpreter = Interpreter::new().unwrap();
        let context = ConversationContext::default();

        let result = interpreter.interpret("  GO TO Cart ", None, &context);
        assert_eq!(result.intent, IntentKind::Navigate);
        assert_eq!(result.route.as_deref(), Some("/customer/cart"));
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let interpreter = Interpreter::new().unwrap();
        let context = ConversationContext::default();

        let first = interpreter.interpret("show me cement", Some("/"), &context);
        let second = interpreter.interpret("show me cement", Some("/"), &context);
        assert_eq!(first, second);
    }

    #[test]
    fn test_interpreter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpreter>();
    }
}
