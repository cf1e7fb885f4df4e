use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Who authored a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A message typed or spoken by the user.
    User,
    /// A reply produced by the assistant (remote or local fallback).
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

// =============================================================================
// Messages and replies
// =============================================================================

/// A single entry in the conversation history.
///
/// Immutable once created; the session controller owns the history sequence
/// and only ever appends (or clears the whole sequence on reset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Optional reference to an audio rendition of the content.
    pub media_ref: Option<String>,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Build a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, None)
    }

    /// Build an assistant-authored message, optionally carrying a media reference.
    pub fn assistant(content: impl Into<String>, media_ref: Option<String>) -> Self {
        Self::new(Role::Assistant, content, media_ref)
    }

    fn new(role: Role, content: impl Into<String>, media_ref: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            media_ref,
            timestamp: Utc::now(),
        }
    }
}

/// The payload a resolved turn hands back to the session controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Reply text.
    pub text: String,
    /// Optional reference to synthesized audio for the reply.
    pub media_ref: Option<String>,
}

impl Reply {
    /// Build a text-only reply.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media_ref: None,
        }
    }
}

// =============================================================================
// Audio
// =============================================================================

/// A captured audio blob handed from the recorder to the voice resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    /// Encoded audio bytes.
    pub data: Vec<u8>,
    /// MIME type of the encoding, e.g. `audio/webm`.
    pub mime_type: String,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

// =============================================================================
// Remote capabilities
// =============================================================================

/// Voice-related capabilities advertised by the remote assistant service.
///
/// Both default to `false`; voice affordances stay disabled until a
/// successful status probe says otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteFeatures {
    /// The service can transcribe captured audio.
    pub speech_to_text: bool,
    /// The service can synthesize spoken replies.
    pub text_to_speech: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Role ----

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_role_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ---- Message constructors ----

    #[test]
    fn test_user_message() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");
        assert!(msg.media_ref.is_none());
    }

    #[test]
    fn test_assistant_message_with_media() {
        let msg = Message::assistant("hi", Some("/audio/1.mp3".to_string()));
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.media_ref.as_deref(), Some("/audio/1.mp3"));
    }

    #[test]
    fn test_messages_have_unique_ids() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }

    // ---- Reply ----

    #[test]
    fn test_reply_text_only() {
        let reply = Reply::text_only("ok");
        assert_eq!(reply.text, "ok");
        assert!(reply.media_ref.is_none());
    }

    // ---- RemoteFeatures ----

    #[test]
    fn test_remote_features_default_disabled() {
        let features = RemoteFeatures::default();
        assert!(!features.speech_to_text);
        assert!(!features.text_to_speech);
    }

    #[test]
    fn test_remote_features_serde_roundtrip() {
        let features = RemoteFeatures {
            speech_to_text: true,
            text_to_speech: false,
        };
        let json = serde_json::to_string(&features).unwrap();
        let back: RemoteFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(back, features);
    }

    // ---- AudioClip ----

    #[test]
    fn test_audio_clip_new() {
        let clip = AudioClip::new(vec![1, 2, 3], "audio/webm");
        assert_eq!(clip.data, vec![1, 2, 3]);
        assert_eq!(clip.mime_type, "audio/webm");
    }
}
