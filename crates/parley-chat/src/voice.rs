//! Audio capture seam.
//!
//! The session controller owns the capture lifecycle but never touches the
//! microphone itself; a host implements [`AudioRecorder`] over the platform
//! audio stack. [`MockRecorder`] simulates capture for tests and headless
//! embedding.

use async_trait::async_trait;
use parley_core::AudioClip;

use crate::error::ChatError;

/// Exclusive handle on the audio capture device for one recording.
///
/// `stop` must release the underlying device on every path, including
/// failures, so an aborted recording never leaks the microphone.
#[async_trait]
pub trait AudioRecorder: Send {
    /// Acquire the device and start capturing.
    ///
    /// Returns [`ChatError::CaptureDenied`] if the user refuses the
    /// microphone permission; no capture state is left behind in that case.
    async fn start(&mut self) -> Result<(), ChatError>;

    /// Stop capturing, release the device, and return the encoded clip.
    async fn stop(&mut self) -> Result<AudioClip, ChatError>;
}

/// Simulated recorder that produces a fixed clip.
#[derive(Debug, Clone)]
pub struct MockRecorder {
    active: bool,
    deny: bool,
    payload: Vec<u8>,
}

impl Default for MockRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRecorder {
    /// Recorder that grants permission and returns a small canned clip.
    pub fn new() -> Self {
        Self {
            active: false,
            deny: false,
            payload: vec![0u8; 64],
        }
    }

    /// Recorder that simulates a refused microphone permission.
    pub fn denying() -> Self {
        Self {
            deny: true,
            ..Self::new()
        }
    }

    /// Whether a capture is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[async_trait]
impl AudioRecorder for MockRecorder {
    async fn start(&mut self) -> Result<(), ChatError> {
        if self.deny {
            return Err(ChatError::CaptureDenied(
                "microphone permission refused".to_string(),
            ));
        }
        if self.active {
            return Err(ChatError::CaptureFailed(
                "capture is already active".to_string(),
            ));
        }
        self.active = true;
        tracing::info!("mock audio capture started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<AudioClip, ChatError> {
        if !self.active {
            return Err(ChatError::CaptureFailed(
                "capture is not active".to_string(),
            ));
        }
        self.active = false;
        tracing::info!("mock audio capture stopped");
        Ok(AudioClip::new(self.payload.clone(), "audio/webm"))
    }
}

// =============================================================================
// Tests
// =============================================================================
