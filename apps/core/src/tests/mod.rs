//! Test Module
//!
//! Cross-module test suites for the portfolio assistant.
//!
//! ## Test Categories
//! - `brain_tests`: Category matching, ordering policy, response pools, fallback
//! - `chat_tests`: Chat session flow, input rules, busy handling
//! - `call_tests`: Simulated call lifecycle
//! - `integration_tests`: Configuration, catalog files and chat wired together

pub mod call_tests;
