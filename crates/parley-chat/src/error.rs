//! Error types for the session engine.

use parley_core::ServiceError;

/// Errors from the chat session engine.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} bytes")]
    MessageTooLong(usize),
    #[error("a turn is already in flight")]
    TurnInFlight,
    #[error("a recording is already in flight")]
    RecordingInFlight,
    #[error("no recording is in flight")]
    NotRecording,
    #[error("speech-to-text is not available")]
    SpeechToTextUnavailable,
    #[error("microphone access denied: {0}")]
    CaptureDenied(String),
    #[error("capture error: {0}")]
    CaptureFailed(String),
    #[error("voice processing failed: {0}")]
    VoiceProcessing(String),
    #[error("{0}")]
    Application(String),
    #[error("assistant service unreachable: {0}")]
    Transport(String),
}

impl From<ServiceError> for ChatError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Transport(reason) => ChatError::Transport(reason),
            ServiceError::Application(msg) => ChatError::Application(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "message cannot be empty"
        );
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 bytes"
        );
        assert_eq!(
            ChatError::TurnInFlight.to_string(),
            "a turn is already in flight"
        );
        assert_eq!(
            ChatError::SpeechToTextUnavailable.to_string(),
            "speech-to-text is not available"
        );
        assert_eq!(
            ChatError::CaptureDenied("permission refused".to_string()).to_string(),
            "microphone access denied: permission refused"
        );
    }

    #[test]
    fn test_application_error_display_is_verbatim() {
        // Application error text is shown to the user as the assistant's
        // reply, so no prefix may be added.
        let err = ChatError::Application("LLM timeout".to_string());
        assert_eq!(err.to_string(), "LLM timeout");
    }

    #[test]
    fn test_from_service_error_preserves_tag() {
        let err: ChatError = ServiceError::Transport("connection refused".to_string()).into();
        assert!(matches!(err, ChatError::Transport(_)));

        let err: ChatError = ServiceError::Application("bad request".to_string()).into();
        assert_eq!(err, ChatError::Application("bad request".to_string()));
    }
}
