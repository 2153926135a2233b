//! Call Demo Tests
//!
//! Full lifecycle of the loopback call against mock media.

use std::time::Duration;

use async_trait::async_trait;

use crate::call::{
    CallError, CallEvent, CallSession, CallState, LocalStream, MediaProvider, MockMediaProvider,
};
use crate::error::AppError;

/// Media provider whose permission prompt is never answered.
struct UnansweredPrompt;

#[async_trait]
impl MediaProvider for UnansweredPrompt {
    async fn acquire(&self, _audio: bool, _video: bool) -> Result<LocalStream, CallError> {
        std::future::pending().await
    }

    async fn release(&self, _stream: &LocalStream) {}
}

#[tokio::test]
async fn test_call_round_trip() {
    let mut call = CallSession::new(MockMediaProvider::granting());
    assert_eq!(call.state(), CallState::Idle);

    assert_eq!(call.call().await.unwrap(), CallState::Connected);
    assert!(call.state().is_active());
    assert_eq!(call.media().live_streams(), 1);

    call.hang_up().await.unwrap();
    assert_eq!(call.media().live_streams(), 0);
    call.reset().unwrap();
    assert_eq!(call.state(), CallState::Idle);
}

#[tokio::test]
async fn test_hang_up_while_connecting() {
    let mut call = CallSession::new(MockMediaProvider::granting());
    call.start().await.unwrap();

    assert_eq!(call.hang_up().await.unwrap(), CallState::Ended);
    assert_eq!(call.media().live_streams(), 0);
}

#[tokio::test]
async fn test_second_call_after_reset() {
    let mut call = CallSession::new(MockMediaProvider::granting());
    call.call().await.unwrap();
    call.hang_up().await.unwrap();

    let err = call.start().await.unwrap_err();
    assert_eq!(
        err,
        CallError::InvalidTransition {
            from: CallState::Ended,
            event: CallEvent::Start
        }
    );

    call.reset().unwrap();
    assert_eq!(call.call().await.unwrap(), CallState::Connected);
}

#[tokio::test]
async fn test_denied_media_surfaces_as_app_error() {
    let mut call = CallSession::new(MockMediaProvider::denying("Permission denied by user"));

    let err: AppError = call.call().await.unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "Call error: Media unavailable: Permission denied by user"
    );
    assert_eq!(call.state(), CallState::Ended);
    assert_eq!(call.state().label(), "Call ended");
}

#[tokio::test]
async fn test_hang_up_when_idle_rejected() {
    let mut call = CallSession::new(MockMediaProvider::granting());
    assert!(call.hang_up().await.is_err());
    assert_eq!(call.state(), CallState::Idle);
}

#[tokio::test]
async fn test_hang_up_while_media_request_pending() {
    let mut call = CallSession::new(UnansweredPrompt);

    let pending = tokio::time::timeout(Duration::from_millis(20), call.start()).await;
    assert!(pending.is_err(), "Media request should still be pending");
    assert_eq!(call.state(), CallState::RequestingMedia);

    assert_eq!(call.hang_up().await.unwrap(), CallState::Ended);
    assert!(call.local_stream().is_none());
    assert_eq!(call.reset().unwrap(), CallState::Idle);
}
