//! portfolio-assistant-core: the portfolio chat assistant and call demo.
//!
//! - [`brain`] - Keyword intent classifier and the portfolio catalog
//! - [`chat`] - Chat session: transcript, input rules, typing pause
//! - [`call`] - Simulated loopback video call state machine
//! - [`config`] - Environment configuration
//! - [`logging`] - Tracing subscriber setup
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use portfolio_assistant_core::brain::{Catalog, IntentClassifier};
//!
//! let table = Arc::new(Catalog::portfolio().into_table().unwrap());
//! let classifier = IntentClassifier::new(table);
//! let reply = classifier.classify("What is your email?");
//! assert!(reply.contains("sarahussain1398@gmail.com"));
//! ```

pub mod brain;
pub mod call;
pub mod chat;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;
