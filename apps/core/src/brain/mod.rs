//! # Brain Module
//!
//! Keyword-based answering for the portfolio assistant.
//! No model, no network: every answer comes from a static table.
//!
//! ## Components
//! - `intent`: Intent categories and the immutable intent table
//! - `classifier`: First-match-wins substring classifier
//! - `picker`: Injectable random source for response selection
//! - `catalog`: Built-in portfolio catalog and JSON catalog files

pub mod catalog;
pub mod classifier;
pub mod intent;
pub mod picker;

pub use catalog::{Catalog, DEFAULT_FALLBACK, DEFAULT_WELCOME};
pub use classifier::{normalize, IntentClassifier};
pub use intent::{IntentCategory, IntentMatch, IntentTable};
pub use picker::{FixedPicker, ResponsePicker, SeededPicker, ThreadRngPicker};
