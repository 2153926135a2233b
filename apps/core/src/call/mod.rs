//! # Call Demo
//!
//! A video call that is answered by the local machine itself. There is no
//! remote peer and no signaling: the "other side" is a loopback that answers
//! as soon as local media is live.
//!
//! ## Components
//! - `state`: call states, events and legal transitions
//! - `media`: local media capture behind the `MediaProvider` trait
//! - `session`: `CallSession`, which drives the state machine

pub mod media;
pub mod session;
pub mod state;

use serde::Serialize;

pub use media::{LocalStream, MediaProvider, MockMediaProvider};
pub use session::CallSession;
pub use state::{CallEvent, CallState};

/// Defines errors that can occur during the simulated call.
#[derive(Debug, thiserror::Error, Serialize, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Camera or microphone access failed or was refused.
    #[error("Media unavailable: {0}")]
    MediaUnavailable(String),
    /// The requested action is not allowed in the current state.
    #[error("Cannot {event:?} while {from:?}")]
    InvalidTransition { from: CallState, event: CallEvent },
}
