use tracing::{info, instrument, warn};

use super::media::{LocalStream, MediaProvider};
use super::state::{CallEvent, CallState};
use super::CallError;

/// Drives one simulated call against a local media provider.
///
/// The remote side is a loopback: [`CallSession::answer`] stands in for the
/// peer picking up, and nothing ever leaves the machine.
///
/// Release is async, so dropping a session does not stop its local stream.
/// Call [`CallSession::hang_up`] before letting an active session go.
pub struct CallSession<M: MediaProvider> {
    media: M,
    state: CallState,
    local_stream: Option<LocalStream>,
    last_error: Option<CallError>,
}

impl<M: MediaProvider> CallSession<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            state: CallState::Idle,
            local_stream: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn local_stream(&self) -> Option<&LocalStream> {
        self.local_stream.as_ref()
    }

    /// Error that ended the last attempt, if any.
    pub fn last_error(&self) -> Option<&CallError> {
        self.last_error.as_ref()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    fn apply(&mut self, event: CallEvent) -> Result<CallState, CallError> {
        let next = self.state.next(event)?;
        info!(from = ?self.state, event = ?event, to = ?next, "Call transition");
        self.state = next;
        Ok(next)
    }

    /// Request local camera and microphone, then wait for the peer.
    ///
    /// On refusal the call ends and the error is kept in [`Self::last_error`].
    /// If this future is dropped mid-request the session stays in
    /// `RequestingMedia`; [`Self::hang_up`] ends it from there.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<CallState, CallError> {
        self.apply(CallEvent::Start)?;

        match self.media.acquire(true, true).await {
            Ok(stream) => {
                self.local_stream = Some(stream);
                self.apply(CallEvent::MediaGranted)
            }
            Err(err) => {
                warn!(error = %err, "Local media request failed");
                self.apply(CallEvent::MediaDenied)?;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// The loopback peer picks up.
    pub fn answer(&mut self) -> Result<CallState, CallError> {
        self.apply(CallEvent::Answered)
    }

    /// Start the call and let the loopback peer answer right away.
    pub async fn call(&mut self) -> Result<CallState, CallError> {
        self.start().await?;
        self.answer()
    }

    /// End the call and release local media.
    #[instrument(skip(self))]
    pub async fn hang_up(&mut self) -> Result<CallState, CallError> {
        let state = self.apply(CallEvent::HangUp)?;
        if let Some(stream) = self.local_stream.take() {
            self.media.release(&stream).await;
        }
        Ok(state)
    }

    /// Return to idle after a call ended.
    pub fn reset(&mut self) -> Result<CallState, CallError> {
        let state = self.apply(CallEvent::Reset)?;
        self.last_error = None;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::media::MockMediaProvider;

    #[tokio::test]
    async fn test_call_connects_and_hangs_up() {
        let mut call = CallSession::new(MockMediaProvider::granting());

        assert_eq!(call.start().await.unwrap(), CallState::Connecting);
        assert!(call.local_stream().is_some());
        assert_eq!(call.answer().unwrap(), CallState::Connected);

        assert_eq!(call.hang_up().await.unwrap(), CallState::Ended);
        assert!(call.local_stream().is_none());
        assert_eq!(call.media().live_streams(), 0);
    }

    #[tokio::test]
    async fn test_denied_media_records_error() {
        let mut call = CallSession::new(MockMediaProvider::denying("No camera"));

        let err = call.start().await.unwrap_err();
        assert_eq!(err, CallError::MediaUnavailable("No camera".to_string()));
        assert_eq!(call.state(), CallState::Ended);
        assert_eq!(call.last_error(), Some(&err));

        assert_eq!(call.reset().unwrap(), CallState::Idle);
        assert!(call.last_error().is_none());
    }

    #[tokio::test]
    async fn test_cannot_answer_when_idle() {
        let mut call = CallSession::new(MockMediaProvider::granting());
        let err = call.answer().unwrap_err();
        assert!(matches!(err, CallError::InvalidTransition { from: CallState::Idle, .. }));
        assert_eq!(call.state(), CallState::Idle);
    }
}
