//! Call state machine for the simulated video call.
//!
//! ```text
//! Idle ──start──▶ RequestingMedia ──granted──▶ Connecting ──answered──▶ Connected
//!                 RequestingMedia ──denied───▶ Ended
//! RequestingMedia / Connecting / Connected ──hang up──▶ Ended
//! Ended ──reset──▶ Idle
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CallError;

/// States of the simulated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallState {
    /// No call; the start button is available.
    Idle,
    /// Waiting for local camera/microphone access.
    RequestingMedia,
    /// Local media is live; the loopback peer has not answered yet.
    Connecting,
    /// The loopback peer answered.
    Connected,
    /// Hung up or failed. Reset to go again.
    Ended,
}

/// UI actions and media outcomes that move the call along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallEvent {
    Start,
    MediaGranted,
    MediaDenied,
    Answered,
    HangUp,
    Reset,
}

impl CallState {
    /// A short human-readable label for the status banner.
    pub fn label(&self) -> &'static str {
        match self {
            CallState::Idle => "Ready to call",
            CallState::RequestingMedia => "Requesting camera and microphone...",
            CallState::Connecting => "Connecting...",
            CallState::Connected => "Connected",
            CallState::Ended => "Call ended",
        }
    }

    /// Returns `true` while local media may be in use.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            CallState::RequestingMedia | CallState::Connecting | CallState::Connected
        )
    }

    /// Compute the next state, or reject the event.
    pub fn next(self, event: CallEvent) -> Result<CallState, CallError> {
        use CallEvent::*;
        use CallState::*;

        match (self, event) {
            (Idle, Start) => Ok(RequestingMedia),
            (RequestingMedia, MediaGranted) => Ok(Connecting),
            (RequestingMedia, MediaDenied) => Ok(Ended),
            (Connecting, Answered) => Ok(Connected),
            (RequestingMedia, HangUp) | (Connecting, HangUp) | (Connected, HangUp) => Ok(Ended),
            (Ended, Reset) => Ok(Idle),
            (from, event) => Err(CallError::InvalidTransition { from, event }),
        }
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
