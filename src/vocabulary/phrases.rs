//! Confirmation and denial phrase sets.

use ahash::AHashSet;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DEFAULT_AFFIRMATIVE: AHashSet<&'static str> =
        ["yes", "yeah", "sure", "correct", "do it", "yep"]
            .into_iter()
            .collect();
    static ref DEFAULT_NEGATIVE: AHashSet<&'static str> =
        ["no", "nope", "cancel", "wrong", "nah"].into_iter().collect();
}

/// Fixed phrase sets for exact-membership confirmation and denial tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSets {
    affirmative: AHashSet<String>,
    negative: AHashSet<String>,
}

impl PhraseSets {
    /// Build phrase sets from the given phrases. Phrases are lowercased.
    pub fn new<A, N>(affirmative: A, negative: N) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        PhraseSets {
            affirmative: affirmative
                .into_iter()
                .map(|p| p.into().trim().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|p| p.into().trim().to_lowercase())
                .collect(),
        }
    }

    /// The built-in phrase sets.
    pub fn builtin() -> Self {
        PhraseSets {
            affirmative: DEFAULT_AFFIRMATIVE.iter().map(|p| p.to_string()).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Exact-membership test against the affirmative set.
    pub fn is_affirmative(&self, text: &str) -> bool {
        self.affirmative.contains(text)
    }

    /// Exact-membership test against the negative set.
    pub fn is_negative(&self, text: &str) -> bool {
        self.negative.contains(text)
    }

    /// The affirmative phrases.
    pub fn affirmative(&self) -> &AHashSet<String> {
        &self.affirmative
    }

    /// The negative phrases.
    pub fn negative(&self) -> &AHashSet<String> {
        &self.negative
    }
}

impl Default for PhraseSets {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_membership() {
        let phrases = PhraseSets::builtin();
        assert!(phrases.is_affirmative("yes"));
        assert!(phrases.is_affirmative("do it"));
        assert!(phrases.is_negative("nope"));
        assert!(!phrases.is_affirmative("yes please"));
        assert!(!phrases.is_negative("yes"));
    }

    #[test]
    fn test_membership_is_exact_not_containment() {
        let phrases = PhraseSets::builtin();
        assert!(!phrases.is_affirmative("yes i would like that"));
        assert!(!phrases.is_negative("no way"));
    }

    #[test]
    fn test_custom_phrases_are_lowercased() {
        let phrases = PhraseSets::new(["Aye"], ["Negative"]);
        assert!(phrases.is_affirmative("aye"));
        assert!(phrases.is_negative("negative"));
    }
}
