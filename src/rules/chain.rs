//! Rule trait and chain evaluation.

use crate::error::Result;
use crate::intent::{ConversationContext, IntentResult};
use crate::rules::actions::{AddToCartRule, AmbiguousCartRule, ClearCartRule, ReportIssueRule};
use crate::rules::category::CategoryRule;
use crate::rules::confirmation::ConfirmationRule;
use crate::rules::followup::FollowUpRule;
use crate::rules::help::HelpRule;
use crate::rules::navigation::NavigationRule;
use crate::rules::orders::OrderStatusRule;
use crate::rules::search::SearchRule;
use crate::rules::suggestion::SuggestionRule;
use crate::vocabulary::InterpreterConfig;

/// Everything a rule may consult when deciding whether to fire.
///
/// `text` is the normalized (lowercased, trimmed, non-empty) transcript.
/// Rules read this input and the vocabulary tables only; nothing here is
/// mutated during evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// Normalized transcript.
    pub text: &'a str,
    /// Number of words in the normalized transcript.
    pub token_count: usize,
    /// Current UI route, consulted only by the add-to-cart gate.
    pub current_path: Option<&'a str>,
    /// Caller-supplied memory of the previous turn.
    pub context: &'a ConversationContext,
    /// Vocabulary tables.
    pub config: &'a InterpreterConfig,
}

/// One matcher in the chain: a predicate and a result builder in a single
/// evaluation step.
///
/// Returning `None` means the rule declines the input and evaluation moves
/// on to the next rule.
pub trait Rule: Send + Sync {
    /// Get the name of this rule for debugging and logging.
    fn name(&self) -> &'static str;

    /// Evaluate the input, producing the final result if this rule matches.
    fn evaluate(&self, input: &RuleInput<'_>) -> Option<IntentResult>;
}

/// The ordered rule list.
///
/// Evaluation is top-to-bottom with short-circuit on the first match; when
/// every rule declines, the fixed UNKNOWN result terminates the chain.
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleChain {
    /// Build the standard chain in priority order: exact confirmation and
    /// denial first, then the contextual follow-up, the compound action
    /// matchers, navigation, category, search, order status, help, and
    /// finally the fuzzy suggestion fallback.
    pub fn standard() -> Result<Self> {
        Ok(RuleChain {
            rules: vec![
                Box::new(ConfirmationRule::new()),
                Box::new(FollowUpRule::new()),
                Box::new(AmbiguousCartRule::new()?),
                Box::new(AddToCartRule::new()),
                Box::new(ClearCartRule::new()),
                Box::new(ReportIssueRule::new()),
                Box::new(NavigationRule::new()?),
                Box::new(CategoryRule::new()),
                Box::new(SearchRule::new()?),
                Box::new(OrderStatusRule::new()),
                Box::new(HelpRule::new()),
                Box::new(SuggestionRule::new()),
            ],
        })
    }

    /// Build a chain from an explicit rule list.
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        RuleChain { rules }
    }

    /// Evaluate the chain, always producing exactly one result.
    pub fn evaluate(&self, input: &RuleInput<'_>) -> IntentResult {
        for rule in &self.rules {
            if let Some(result) = rule.evaluate(input) {
                log::debug!(
                    "rule '{}' fired: intent={} confidence={:.2}",
                    rule.name(),
                    result.intent,
                    result.confidence
                );
                return result;
            }
        }
        log::debug!("no rule fired, returning UNKNOWN");
        IntentResult::no_match()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rule_names())
            .finish()
    }
}
