//! Product category vocabulary.

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::title_case;
use crate::error::{DragomanError, Result};

/// Built-in category names. The set is fixed and finite; dynamically added
/// supplier categories are never consulted by the engine.
const DEFAULT_CATEGORIES: &[&str] = &[
    "cement",
    "bricks",
    "sand",
    "iron rods",
    "tmt bars",
    "paints",
    "interiors",
    "borewells",
    "earth movers",
    "steel",
    "gravel",
];

/// Closed list of canonical lowercase category names.
///
/// List order is fixed and drives first-hit containment matching; the
/// display form is title-cased on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVocabulary {
    names: Vec<String>,
}

impl CategoryVocabulary {
    /// Build a vocabulary from the given names.
    ///
    /// Names are trimmed and lowercased. Fails on an empty list, empty
    /// names, or duplicates.
    pub fn new<S: Into<String>>(names: Vec<S>) -> Result<Self> {
        if names.is_empty() {
            return Err(DragomanError::vocabulary(
                "category vocabulary must not be empty",
            ));
        }

        let mut normalized: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.into().trim().to_lowercase();
            if name.is_empty() {
                return Err(DragomanError::vocabulary("category name must not be empty"));
            }
            if normalized.contains(&name) {
                return Err(DragomanError::vocabulary(format!(
                    "duplicate category name: {name}"
                )));
            }
            normalized.push(name);
        }

        Ok(CategoryVocabulary { names: normalized })
    }

    /// The built-in storefront categories.
    pub fn builtin() -> Self {
        CategoryVocabulary {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Iterate category names in list order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The category names in list order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the vocabulary contains the given canonical name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The first category (in list order) contained anywhere in the given
    /// text, or None.
    ///
    /// This is the shared containment-lookup primitive: the category rule
    /// applies it to the full normalized transcript, the ambiguous
    /// add-to-cart rule to a captured phrase. Note that when the text names
    /// several categories, list order decides the winner, not text order.
    pub fn first_contained_in(&self, text: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| text.contains(name.as_str()))
            .map(String::as_str)
    }

    /// Title-cased display form of a category name.
    pub fn display_name(&self, name: &str) -> String {
        title_case(name)
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary() {
        let vocab = CategoryVocabulary::builtin();
        assert_eq!(vocab.len(), 11);
        assert!(vocab.contains("cement"));
        assert!(vocab.contains("earth movers"));
        assert!(!vocab.contains("pipes"));
    }

    #[test]
    fn test_first_contained_in() {
        let vocab = CategoryVocabulary::builtin();
        assert_eq!(vocab.first_contained_in("show me cement"), Some("cement"));
        assert_eq!(vocab.first_contained_in("i need tmt bars today"), Some("tmt bars"));
        assert_eq!(vocab.first_contained_in("nothing relevant"), None);
    }

    #[test]
    fn test_multiple_categories_resolve_by_list_order() {
        let vocab = CategoryVocabulary::builtin();
        // "cement" precedes "sand" in the vocabulary, so it wins even when
        // "sand" appears first in the text.
        assert_eq!(vocab.first_contained_in("sand and cement"), Some("cement"));
    }

    #[test]
    fn test_names_are_normalized() {
        let vocab = CategoryVocabulary::new(vec![" Cement ", "BRICKS"]).unwrap();
        assert!(vocab.contains("cement"));
        assert!(vocab.contains("bricks"));
    }

    #[test]
    fn test_invalid_vocabularies_rejected() {
        assert!(CategoryVocabulary::new(Vec::<String>::new()).is_err());
        assert!(CategoryVocabulary::new(vec!["cement", "  "]).is_err());
        assert!(CategoryVocabulary::new(vec!["cement", "Cement"]).is_err());
    }

    #[test]
    fn test_display_name() {
        let vocab = CategoryVocabulary::builtin();
        assert_eq!(vocab.display_name("iron rods"), "Iron Rods");
    }
}
