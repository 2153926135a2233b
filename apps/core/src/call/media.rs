use async_trait::async_trait;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use super::CallError;

/// A captured local audio/video stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalStream {
    pub id: Uuid,
    pub has_audio: bool,
    pub has_video: bool,
}

/// Source of local camera/microphone streams.
///
/// Abstracts the capture device so the call can run against real hardware
/// or a mock in tests.
#[async_trait]
pub trait MediaProvider: Send + Sync + 'static {
    /// Acquire a local stream.
    async fn acquire(&self, audio: bool, video: bool) -> Result<LocalStream, CallError>;

    /// Release a stream returned by [`MediaProvider::acquire`].
    async fn release(&self, stream: &LocalStream);
}

/// Media provider that grants or denies access without touching hardware.
#[derive(Debug, Clone)]
pub struct MockMediaProvider {
    denial: Option<String>,
    live: Arc<AtomicUsize>,
}

impl MockMediaProvider {
    /// A provider that always grants access.
    pub fn granting() -> Self {
        Self {
            denial: None,
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider that always refuses with `reason`.
    pub fn denying(reason: impl Into<String>) -> Self {
        Self {
            denial: Some(reason.into()),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of streams acquired and not yet released.
    pub fn live_streams(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaProvider for MockMediaProvider {
    async fn acquire(&self, audio: bool, video: bool) -> Result<LocalStream, CallError> {
        if let Some(reason) = &self.denial {
            return Err(CallError::MediaUnavailable(reason.clone()));
        }
        if !audio && !video {
            return Err(CallError::MediaUnavailable(
                "At least one of audio or video must be requested".to_string(),
            ));
        }
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(LocalStream {
            id: Uuid::new_v4(),
            has_audio: audio,
            has_video: video,
        })
    }

    async fn release(&self, _stream: &LocalStream) {
        let _ = self
            .live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}
