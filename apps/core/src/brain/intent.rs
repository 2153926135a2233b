//! Intent categories and the immutable intent table.
//!
//! A category is a named bucket of lowercase substring triggers and a pool of
//! canned responses. The table keeps categories in declaration order, which is
//! also the order the classifier evaluates them in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::AppError;

/// A named bucket of keyword triggers and candidate responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentCategory {
    /// Category name (e.g. `greetings`, `contact`)
    pub name: String,
    /// Substring triggers, stored lowercased
    pub keywords: Vec<String>,
    /// Candidate responses, one is picked per match
    pub responses: Vec<String>,
}

impl IntentCategory {
    /// Create a category. Keywords are lowercased here so matching never has to.
    pub fn new<N, K, R>(name: N, keywords: K, responses: R) -> Self
    where
        N: Into<String>,
        K: IntoIterator,
        K::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the first keyword contained in an already-normalized input.
    pub fn matching_keyword(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| normalized.contains(keyword.as_str()))
            .map(String::as_str)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Config("Intent category with an empty name".to_string()));
        }
        if self.keywords.is_empty() {
            return Err(AppError::Config(format!(
                "Intent category '{}' has no keywords",
                self.name
            )));
        }
        if self.responses.is_empty() {
            return Err(AppError::Config(format!(
                "Intent category '{}' has no responses",
                self.name
            )));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(AppError::Config(format!(
                "Intent category '{}' has a blank keyword",
                self.name
            )));
        }
        if self.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(AppError::Config(format!(
                "Intent category '{}' has a blank response",
                self.name
            )));
        }
        Ok(())
    }
}

/// Ordered, validated set of categories plus the fallback response.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentTable {
    categories: Vec<IntentCategory>,
    fallback: String,
}

impl IntentTable {
    /// Build a table, checking every category invariant.
    ///
    /// Keywords are lowercased again in case the categories were deserialized
    /// rather than built with [`IntentCategory::new`].
    pub fn new(categories: Vec<IntentCategory>, fallback: impl Into<String>) -> Result<Self, AppError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(AppError::Config("Fallback response must not be blank".to_string()));
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(categories.len());
        for mut category in categories {
            category.validate()?;
            if !seen.insert(category.name.clone()) {
                return Err(AppError::Config(format!(
                    "Duplicate intent category '{}'",
                    category.name
                )));
            }
            for keyword in category.keywords.iter_mut() {
                *keyword = keyword.to_lowercase();
            }
            normalized.push(category);
        }

        Ok(Self {
            categories: normalized,
            fallback,
        })
    }

    /// Categories in evaluation order
    pub fn categories(&self) -> &[IntentCategory] {
        &self.categories
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&IntentCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of keywords across all categories (worst-case scan length).
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

/// Outcome of a classification, with the decision that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentMatch {
    /// Matched category name, `None` when the fallback was used
    pub category: Option<String>,
    /// Keyword that triggered the match
    pub keyword: Option<String>,
    /// Response text to show the visitor
    pub response: String,
}

impl IntentMatch {
    pub fn is_fallback(&self) -> bool {
        self.category.is_none()
    }
}

impl fmt::Display for IntentMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.response)
    }
}
