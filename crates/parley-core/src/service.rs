//! Contract for the remote assistant service.
//!
//! The session engine never talks HTTP directly; it consumes this trait.
//! The distinction between a transport failure and an application-level
//! failure is carried as an explicit tag, never inferred from error text:
//! transport failures are recoverable (the resolver falls back to canned
//! responses), application failures are surfaced to the user.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{AudioClip, RemoteFeatures, Reply};

/// Failure reported by an [`AssistantService`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not be reached at all: connection refused,
    /// network failure, or timeout. Eligible for local fallback.
    #[error("assistant service unreachable: {0}")]
    Transport(String),

    /// The service was reached but reported a failure in-band
    /// (bad request, server-side exception). Never falls back.
    #[error("{0}")]
    Application(String),
}

/// Remote assistant service consumed by the resolver and session controller.
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Submit a text message and return the assistant's reply.
    ///
    /// `want_audio` asks the service to also synthesize a spoken rendition
    /// of the reply; implementations that cannot honor it return a
    /// text-only reply.
    async fn chat(&self, message: &str, want_audio: bool) -> Result<Reply, ServiceError>;

    /// Submit a captured audio clip to the voice endpoint.
    async fn chat_voice(&self, clip: &AudioClip, want_audio: bool)
        -> Result<Reply, ServiceError>;

    /// Ask the service to drop its server-side conversation history.
    async fn clear_history(&self) -> Result<(), ServiceError>;

    /// Fetch the voice capabilities the service currently offers.
    async fn features(&self) -> Result<RemoteFeatures, ServiceError>;

    /// Probe service health. Advisory only; callers must not gate
    /// behavior on the result.
    async fn health(&self) -> Result<bool, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = ServiceError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "assistant service unreachable: connection refused"
        );
    }

    #[test]
    fn test_application_error_display_is_verbatim() {
        // Application errors surface to the user as-is, so Display must not
        // add any prefix.
        let err = ServiceError::Application("LLM timeout".to_string());
        assert_eq!(err.to_string(), "LLM timeout");
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let transport = ServiceError::Transport("x".to_string());
        let application = ServiceError::Application("x".to_string());
        assert_ne!(transport, application);
    }
}
