//! Regression tests for rule ordering and chain-wide invariants.

use dragoman::intent::{ConversationContext, IntentKind};
use dragoman::interpreter::Interpreter;

fn interpreter() -> Interpreter {
    Interpreter::new().unwrap()
}

fn no_context() -> ConversationContext {
    ConversationContext::default()
}

/// A broad battery of transcripts exercising every rule family.
fn battery() -> Vec<&'static str> {
    vec![
        "yes",
        "nope",
        "do it",
        "go to cart",
        "open my orders",
        "navigate to supplier dashboard",
        "go back",
        "cart",
        "my cart",
        "show me cement",
        "looking for iron rods",
        "sand and cement",
        "search for waterproof sheets",
        "find pvc pipes in chennai",
        "add cement to cart",
        "add to cart",
        "buy this",
        "clear cart",
        "empty basket",
        "report bug",
        "feedback",
        "where is my order",
        "order status",
        "help",
        "what can you do",
        "cemnt",
        "brcks",
        "snd",
        "xyz totally random",
        "completely unrelated rambling about the weather today",
        "",
    ]
}

#[test]
fn test_confirmation_outranks_every_other_rule() {
    let engine = interpreter();

    // Even with follow-up context in play, a bare confirmation wins
    let context = ConversationContext {
        last_intent: Some(IntentKind::Category),
        last_entity: Some("cement".to_string()),
    };
    let result = engine.interpret("yes", Some("/product/123"), &context);
    assert_eq!(result.intent, IntentKind::Confirm);

    let result = engine.interpret("cancel", Some("/product/123"), &context);
    assert_eq!(result.intent, IntentKind::Deny);
}

#[test]
fn test_follow_up_outranks_action_and_category_rules() {
    let engine = interpreter();
    let context = ConversationContext {
        last_intent: Some(IntentKind::Category),
        last_entity: Some("cement".to_string()),
    };

    // "cheapest cement" names a category, but with category context the
    // follow-up rule is consulted first
    let result = engine.interpret("cheapest cement", None, &context);
    assert_eq!(result.intent, IntentKind::SortAction);
    assert_eq!(result.category.as_deref(), Some("cement"));
}

#[test]
fn test_clarification_outranks_generic_add_to_cart() {
    let engine = interpreter();

    // Category-qualified adds are disambiguated even on an eligible page
    let result = engine.interpret("add cement to cart", Some("/product/123"), &no_context());
    assert_eq!(result.intent, IntentKind::Clarification);
    assert_eq!(result.category.as_deref(), Some("cement"));
}

#[test]
fn test_category_outranks_search_reclassification() {
    let engine = interpreter();

    // "search for cement" satisfies both the category containment test and
    // the search prefix; the category rule runs first
    let result = engine.interpret("search for cement", None, &no_context());
    assert_eq!(result.intent, IntentKind::Category);
    assert_eq!(result.confidence, 0.94);
}

#[test]
fn test_navigation_outranks_category_for_route_targets() {
    let engine = interpreter();

    // "categories" is a route key, not a category name
    let result = engine.interpret("go to categories", None, &no_context());
    assert_eq!(result.intent, IntentKind::Navigate);
    assert_eq!(result.route.as_deref(), Some("/customer/categories"));
}

#[test]
fn test_confidence_is_always_in_unit_range() {
    let engine = interpreter();
    for transcript in battery() {
        let result = engine.interpret(transcript, Some("/product/1"), &no_context());
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of range for {transcript:?}",
            result.confidence
        );
    }
}

#[test]
fn test_category_always_comes_from_the_vocabulary() {
    let engine = interpreter();
    let categories = engine.config().categories.clone();

    let context = ConversationContext {
        last_intent: Some(IntentKind::Category),
        last_entity: Some("cement".to_string()),
    };
    for transcript in battery() {
        let result = engine.interpret(transcript, None, &context);
        if let Some(category) = &result.category {
            assert!(
                categories.contains(category),
                "category {category:?} for {transcript:?} is not in the vocabulary"
            );
        }
    }
}

#[test]
fn test_interpretation_is_idempotent() {
    let engine = interpreter();
    let context = ConversationContext {
        last_intent: Some(IntentKind::Category),
        last_entity: Some("sand".to_string()),
    };
    for transcript in battery() {
        let first = engine.interpret(transcript, Some("/category/7"), &context);
        let second = engine.interpret(transcript, Some("/category/7"), &context);
        assert_eq!(first, second, "divergent results for {transcript:?}");
    }
}

#[test]
fn test_every_result_is_well_formed() {
    let engine = interpreter();
    for transcript in battery() {
        let result = engine.interpret(transcript, None, &no_context());
        assert!(!result.message.is_empty(), "empty message for {transcript:?}");
        // The serialized intent label is one of the fifteen wire labels
        assert!(
            IntentKind::all().contains(&result.intent),
            "unexpected intent for {transcript:?}"
        );
    }
}
