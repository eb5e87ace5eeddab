//! # Dragoman
//!
//! A deterministic, rule-based natural-language command interpreter.
//! Dragoman converts a free-form speech transcript (produced by an external
//! speech-to-text component) plus lightweight conversation context into a
//! single structured intent that a calling application uses to navigate,
//! search, or act.
//!
//! ## Features
//!
//! - Ordered chain-of-responsibility rule evaluation
//! - Closed route and category vocabularies supplied as configuration
//! - Contextual follow-up resolution from caller-supplied context
//! - Levenshtein-based "did you mean" fallback for short inputs
//! - Pure, synchronous, thread-safe interpretation with no I/O
//!
//! ## Example
//!
//! ```rust
//! use dragoman::interpreter::Interpreter;
//! use dragoman::intent::{ConversationContext, IntentKind};
//!
//! # fn main() -> dragoman::error::Result<()> {
//! let interpreter = Interpreter::new()?;
//! let result = interpreter.interpret("go to cart", None, &ConversationContext::default());
//!
//! assert_eq!(result.intent, IntentKind::Navigate);
//! assert_eq!(result.route.as_deref(), Some("/customer/cart"));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod intent;
pub mod interpreter;
pub mod rules;
pub mod util;
pub mod vocabulary;

pub use intent::{ConversationContext, IntentKind, IntentResult};
pub use interpreter::Interpreter;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
