//! Interpreter configuration: the three vocabularies bundled together.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vocabulary::categories::CategoryVocabulary;
use crate::vocabulary::phrases::PhraseSets;
use crate::vocabulary::routes::{RouteEntry, RouteTable};

/// All vocabulary tables consulted by the rule chain.
///
/// Supplied at interpreter construction and immutable afterwards. `Default`
/// provides the built-in storefront vocabulary.
#[derive(Debug, Clone, Default)]
pub struct InterpreterConfig {
    /// Route keyword table.
    pub routes: RouteTable,
    /// Product category vocabulary.
    pub categories: CategoryVocabulary,
    /// Confirmation and denial phrase sets.
    pub phrases: PhraseSets,
}

/// On-disk JSON form of the vocabulary tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyFile {
    /// Route entries, in priority order.
    pub routes: Vec<RouteEntry>,
    /// Canonical category names.
    pub categories: Vec<String>,
    /// Affirmative phrases.
    pub affirmative: Vec<String>,
    /// Negative phrases.
    pub negative: Vec<String>,
}

impl InterpreterConfig {
    /// Build a validated configuration from an on-disk vocabulary.
    pub fn from_vocabulary(file: VocabularyFile) -> Result<Self> {
        Ok(InterpreterConfig {
            routes: RouteTable::new(file.routes)?,
            categories: CategoryVocabulary::new(file.categories)?,
            phrases: PhraseSets::new(file.affirmative, file.negative),
        })
    }

    /// Load and validate a vocabulary from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: VocabularyFile = serde_json::from_str(&content)?;
        Self::from_vocabulary(file)
    }
}
