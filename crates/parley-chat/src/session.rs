//! Session controller: the turn-taking state machine.
//!
//! Owns the conversation history and the two mutual-exclusion guards
//! (`pending_turn`, `recording`). All side effects flow through the
//! transcript and recorder collaborators; the controller renders nothing
//! itself. Single-writer by construction: a submission is rejected while a
//! turn or recording is in flight, so history appends never interleave.

use std::sync::Arc;

use parley_core::config::ParleyConfig;
use parley_core::{AssistantService, Message, RemoteFeatures, ServiceError};
use tracing::{debug, info, warn};

use crate::error::ChatError;
use crate::responder::{RandomSource, ResponseResolver};
use crate::transcript::Transcript;
use crate::voice::AudioRecorder;

/// History placeholder for a turn submitted by voice. The spoken content
/// only exists as audio; the transcription comes back in the reply.
const VOICE_MESSAGE_LABEL: &str = "[voice message]";

/// Fixed apology shown when the voice endpoint fails. There is no local
/// speech recognition, so no fallback exists for audio.
const VOICE_FAILURE_REPLY: &str =
    "Sorry, I couldn't process your voice message. Please try again.";

/// Catch-all reply for errors that are neither application-level nor
/// recoverable by fallback.
const GENERIC_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Orchestrates turn-taking between the user, the resolver, and the
/// presentation/capture collaborators.
pub struct SessionController<S, R, T>
where
    S: AssistantService,
    R: AudioRecorder,
    T: Transcript,
{
    service: Arc<S>,
    resolver: ResponseResolver<S>,
    recorder: R,
    transcript: T,
    history: Vec<Message>,
    pending_turn: bool,
    recording: bool,
    voice_reply_enabled: bool,
    features: RemoteFeatures,
    max_message_length: usize,
}

impl<S, R, T> SessionController<S, R, T>
where
    S: AssistantService,
    R: AudioRecorder,
    T: Transcript,
{
    /// Create a controller with disabled voice features.
    ///
    /// Call [`refresh_features`](Self::refresh_features) to enable voice
    /// affordances once the remote service advertises them.
    pub fn new(
        service: Arc<S>,
        recorder: R,
        transcript: T,
        rng: Box<dyn RandomSource>,
        config: &ParleyConfig,
    ) -> Self {
        let resolver = ResponseResolver::new(Arc::clone(&service), rng, &config.chat);
        Self {
            service,
            resolver,
            recorder,
            transcript,
            history: Vec::new(),
            pending_turn: false,
            recording: false,
            voice_reply_enabled: config.chat.voice_reply,
            features: RemoteFeatures::default(),
            max_message_length: config.chat.max_message_length,
        }
    }

    // -----------------------------------------------------------------
    // Turn submission
    // -----------------------------------------------------------------

    /// Submit a text message and complete one full turn.
    ///
    /// Rejected without side effects while a turn or recording is in
    /// flight, or when the trimmed text is empty or too long. On
    /// acceptance the user message and exactly one assistant message
    /// (remote reply, local fallback, or error text) are appended.
    pub async fn submit_text(&mut self, text: &str) -> Result<(), ChatError> {
        if self.pending_turn {
            return Err(ChatError::TurnInFlight);
        }
        if self.recording {
            return Err(ChatError::RecordingInFlight);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if trimmed.len() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }

        self.append(Message::user(trimmed));
        self.pending_turn = true;
        self.transcript.show_pending();

        let reply = match self.resolver.resolve_text(trimmed, self.want_audio()).await {
            Ok(reply) => Message::assistant(reply.text, reply.media_ref),
            Err(ChatError::Application(msg)) => {
                // Surfaced verbatim as the assistant's reply; the turn
                // completes normally.
                info!("assistant service reported an error: {}", msg);
                Message::assistant(msg, None)
            }
            Err(other) => {
                warn!(error = %other, "turn failed");
                Message::assistant(GENERIC_FAILURE_REPLY, None)
            }
        };

        self.transcript.clear_pending();
        self.append(reply);
        self.pending_turn = false;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Voice capture lifecycle
    // -----------------------------------------------------------------

    /// Start a voice recording.
    ///
    /// Requires the service to advertise speech-to-text and no turn or
    /// recording to be in flight. A refused microphone permission leaves
    /// every guard clear.
    pub async fn begin_capture(&mut self) -> Result<(), ChatError> {
        if !self.features.speech_to_text {
            return Err(ChatError::SpeechToTextUnavailable);
        }
        if self.recording {
            return Err(ChatError::RecordingInFlight);
        }
        if self.pending_turn {
            return Err(ChatError::TurnInFlight);
        }

        self.recorder.start().await?;
        self.recording = true;
        info!("voice capture started");
        Ok(())
    }

    /// Stop the recording and complete one voice turn.
    ///
    /// The device is released whether or not the stop succeeds. A voice
    /// resolution failure surfaces as a fixed apology reply; the turn
    /// still completes.
    pub async fn end_capture(&mut self) -> Result<(), ChatError> {
        if !self.recording {
            return Err(ChatError::NotRecording);
        }

        let stopped = self.recorder.stop().await;
        self.recording = false;
        let clip = stopped?;
        info!(bytes = clip.data.len(), "voice capture stopped");

        self.append(Message::user(VOICE_MESSAGE_LABEL));
        self.pending_turn = true;
        self.transcript.show_pending();

        let reply = match self.resolver.resolve_voice(&clip, self.want_audio()).await {
            Ok(reply) => Message::assistant(reply.text, reply.media_ref),
            Err(e) => {
                warn!(error = %e, "voice turn failed");
                Message::assistant(VOICE_FAILURE_REPLY, None)
            }
        };

        self.transcript.clear_pending();
        self.append(reply);
        self.pending_turn = false;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Session lifecycle
    // -----------------------------------------------------------------

    /// Clear the conversation, remotely and locally.
    ///
    /// An in-band failure from the remote clear aborts the reset: the
    /// service acknowledged the request and refused it, so local history
    /// must stay in sync with the remote one. A transport failure is
    /// deliberately treated differently: an unreachable service holds no
    /// live conversation for this session, so the local reset proceeds
    /// after a warning instead of stranding stale history.
    pub async fn reset_session(&mut self) -> Result<(), ChatError> {
        match self.service.clear_history().await {
            Ok(()) => debug!("remote history cleared"),
            Err(ServiceError::Transport(reason)) => {
                warn!(%reason, "remote history clear skipped; service unreachable");
            }
            Err(ServiceError::Application(msg)) => {
                return Err(ChatError::Application(msg));
            }
        }

        if self.recording {
            // Release the device; a stop failure must not block the reset.
            let _ = self.recorder.stop().await;
            self.recording = false;
        }
        self.history.clear();
        self.pending_turn = false;
        self.transcript.reset();
        info!("session reset");
        Ok(())
    }

    /// Fetch the remote voice capabilities.
    ///
    /// On failure the features stay disabled; voice affordances simply do
    /// not appear.
    pub async fn refresh_features(&mut self) {
        match self.service.features().await {
            Ok(features) => {
                info!(?features, "remote features updated");
                self.features = features;
            }
            Err(e) => {
                warn!(error = %e, "status probe failed; voice features disabled");
                self.features = RemoteFeatures::default();
            }
        }
    }

    /// Advisory health probe. Logs only; never gates behavior.
    pub async fn check_health(&self) {
        match self.service.health().await {
            Ok(true) => debug!("assistant service healthy"),
            Ok(false) => warn!("assistant service reports its LLM client is not initialized"),
            Err(e) => warn!(error = %e, "health probe failed"),
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// The conversation history, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Whether a turn is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending_turn
    }

    /// Whether a recording is currently in flight.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// The last known remote capabilities.
    pub fn features(&self) -> RemoteFeatures {
        self.features
    }

    /// Whether spoken replies are requested when available.
    pub fn voice_reply_enabled(&self) -> bool {
        self.voice_reply_enabled
    }

    /// Toggle spoken replies.
    pub fn set_voice_reply(&mut self, enabled: bool) {
        self.voice_reply_enabled = enabled;
    }

    // -----------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------

    fn want_audio(&self) -> bool {
        self.voice_reply_enabled && self.features.text_to_speech
    }

    fn append(&mut self, message: Message) {
        self.transcript.append(&message);
        self.history.push(message);
    }
}

// =============================================================================
// Tests
// =============================================================================
