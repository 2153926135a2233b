//! Chat widget state: transcript, input rules and the simulated typing pause.
//!
//! The chat session is the only caller of the intent classifier. It owns
//! everything the classifier deliberately does not: validation, latency and
//! the message list shown to the visitor.

pub mod message;
pub mod session;

pub use message::{ChatMessage, Sender};
pub use session::{ChatSession, UserInput, MAX_INPUT_CHARS};
