//! Intent Classification using keyword substring matching.
//!
//! Input is trimmed and lowercased, then categories are scanned in declared
//! order. The first category with any keyword contained in the input wins and
//! one of its responses is picked at random. Nothing matched means the fixed
//! fallback response.
//!
//! Matching is plain substring containment: "hi" fires inside "history" and
//! an earlier category shadows a later, more specific one. Both behaviours are
//! part of the contract.

use std::sync::Arc;
use tracing::debug;

use super::intent::{IntentMatch, IntentTable};
use super::picker::{ResponsePicker, ThreadRngPicker};

/// Maps free text to one canned response.
pub struct IntentClassifier {
    table: Arc<IntentTable>,
    picker: Box<dyn ResponsePicker>,
}

impl IntentClassifier {
    /// Create a classifier drawing responses from the thread-local RNG.
    pub fn new(table: Arc<IntentTable>) -> Self {
        Self::with_picker(table, ThreadRngPicker)
    }

    /// Create a classifier with an explicit random source.
    pub fn with_picker<P>(table: Arc<IntentTable>, picker: P) -> Self
    where
        P: ResponsePicker + 'static,
    {
        Self {
            table,
            picker: Box::new(picker),
        }
    }

    pub fn table(&self) -> &IntentTable {
        &self.table
    }

    /// Classify a message and return the response text.
    pub fn classify(&self, text: &str) -> String {
        self.classify_detailed(text).response
    }

    /// Classify a message, reporting which category and keyword decided it.
    pub fn classify_detailed(&self, text: &str) -> IntentMatch {
        let normalized = normalize(text);

        if !normalized.is_empty() {
            for category in self.table.categories() {
                if let Some(keyword) = category.matching_keyword(&normalized) {
                    // IntentTable guarantees at least one response per category.
                    let last = category.responses.len() - 1;
                    let index = self.picker.pick(category.responses.len()).min(last);
                    let response = category.responses[index].clone();

                    debug!(
                        category = %category.name,
                        keyword = %keyword,
                        index,
                        "Intent matched"
                    );

                    return IntentMatch {
                        category: Some(category.name.clone()),
                        keyword: Some(keyword.to_string()),
                        response,
                    };
                }
            }
        }

        debug!(chars = normalized.chars().count(), "No intent matched, using fallback");
        IntentMatch {
            category: None,
            keyword: None,
            response: self.table.fallback().to_string(),
        }
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
