//! Chat session: one visitor, one input box, one pending reply at a time.

use rand::Rng;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, instrument};
use validator::Validate;

use super::message::ChatMessage;
use crate::brain::IntentClassifier;
use crate::config::TypingDelay;
use crate::error::AppError;

/// Longest message a visitor may send, in characters.
pub const MAX_INPUT_CHARS: usize = 500;

// `validator` length bounds are `u64`; same value as `MAX_INPUT_CHARS`.
const MAX_INPUT_CHARS_U64: u64 = MAX_INPUT_CHARS as u64;

/// A visitor message that passed the input rules.
#[derive(Debug, Clone, Validate)]
pub struct UserInput {
    #[validate(length(max = MAX_INPUT_CHARS_U64))]
    text: String,
}

impl UserInput {
    /// Reject blank text and text longer than [`MAX_INPUT_CHARS`].
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::Validation("Message must not be empty".to_string()));
        }
        let input = Self {
            text: raw.to_string(),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug)]
struct ChatState {
    messages: Vec<ChatMessage>,
    pending: bool,
    open: bool,
}

/// Clears the pending flag even if the reply future is dropped mid-pause.
struct PendingGuard<'a> {
    state: &'a Mutex<ChatState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).pending = false;
    }
}

fn lock(state: &Mutex<ChatState>) -> MutexGuard<'_, ChatState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// The chat widget's state and its conversation with the classifier.
pub struct ChatSession {
    classifier: Arc<IntentClassifier>,
    typing_delay: TypingDelay,
    state: Mutex<ChatState>,
}

impl ChatSession {
    /// Start a session whose transcript opens with `welcome` from the bot.
    pub fn new(classifier: Arc<IntentClassifier>, welcome: &str, typing_delay: TypingDelay) -> Self {
        Self {
            classifier,
            typing_delay,
            state: Mutex::new(ChatState {
                messages: vec![ChatMessage::bot(welcome)],
                pending: false,
                open: false,
            }),
        }
    }

    /// Snapshot of the transcript, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.state).messages.clone()
    }

    /// `true` while a reply is being "typed".
    pub fn is_busy(&self) -> bool {
        lock(&self.state).pending
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).open
    }

    pub fn open(&self) {
        lock(&self.state).open = true;
    }

    pub fn close(&self) {
        lock(&self.state).open = false;
    }

    /// Send a visitor message and wait for the assistant's reply.
    ///
    /// The reply is classified from the raw text after a random typing pause.
    /// A second call while a reply is pending fails with [`AppError::Busy`].
    #[instrument(skip(self, raw), fields(chars = raw.chars().count()))]
    pub async fn send(&self, raw: &str) -> Result<ChatMessage, AppError> {
        let input = UserInput::parse(raw)?;

        {
            let mut state = lock(&self.state);
            if state.pending {
                return Err(AppError::Busy);
            }
            state.pending = true;
            state.messages.push(ChatMessage::user(input.text()));
        }
        let _guard = PendingGuard { state: &self.state };

        let pause = self.next_delay();
        debug!(delay_ms = pause.as_millis() as u64, "Assistant typing");
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        let result = self.classifier.classify_detailed(input.text());
        info!(
            category = result.category.as_deref().unwrap_or("fallback"),
            "Assistant replied"
        );

        let reply = ChatMessage::bot(result.response);
        lock(&self.state).messages.push(reply.clone());
        Ok(reply)
    }

    fn next_delay(&self) -> Duration {
        let TypingDelay { min_ms, max_ms } = self.typing_delay;
        let ms = if max_ms > min_ms {
            rand::thread_rng().gen_range(min_ms..max_ms)
        } else {
            min_ms
        };
        Duration::from_millis(ms)
    }
}
