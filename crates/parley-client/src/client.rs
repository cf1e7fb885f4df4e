//! reqwest-backed [`AssistantService`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use base64::prelude::*;
use parley_core::config::ParleyConfig;
use parley_core::{
    AssistantService, AudioClip, ParleyError, RemoteFeatures, Reply, ServiceError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    want_audio: bool,
}

#[derive(Debug, Serialize)]
struct VoiceRequest<'a> {
    audio: String,
    mime_type: &'a str,
    want_audio: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
    #[serde(default)]
    audio_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    features: RemoteFeatures,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    llm_client_initialized: bool,
}

// =============================================================================
// HttpAssistantClient
// =============================================================================

/// HTTP client for the assistant backend.
///
/// Error mapping follows the service contract: a request that never got an
/// answer (connect failure, timeout) is [`ServiceError::Transport`]; any
/// answer from the server, including `{"error": ...}` bodies and bare HTTP
/// failure statuses, is [`ServiceError::Application`].
#[derive(Debug, Clone)]
pub struct HttpAssistantClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAssistantClient {
    /// Build a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ParleyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ParleyError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the service section of the configuration.
    pub fn from_config(config: &ParleyConfig) -> Result<Self, ParleyError> {
        Self::new(
            &config.service.base_url,
            Duration::from_secs(config.service.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn send_error(err: reqwest::Error) -> ServiceError {
    // Connect failures and timeouts are the common cases; either way the
    // server never answered, so the outcome is transport-level.
    debug!(
        connect = err.is_connect(),
        timeout = err.is_timeout(),
        "request did not complete"
    );
    ServiceError::Transport(err.to_string())
}

/// Decode a reply body, honoring in-band error envelopes.
async fn read_reply(response: reqwest::Response) -> Result<Reply, ServiceError> {
    let status = response.status();
    let body = response.text().await.map_err(send_error)?;

    if status.is_success() {
        if let Ok(parsed) = serde_json::from_str::<ChatResponse>(&body) {
            return Ok(Reply {
                text: parsed.response,
                media_ref: parsed.audio_url,
            });
        }
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
            return Err(ServiceError::Application(parsed.error));
        }
        return Err(ServiceError::Application(format!(
            "malformed response body: {body}"
        )));
    }

    Err(read_failure(status, &body))
}

/// Map a non-success status to an application error, preferring the
/// server's own `{"error": ...}` message when the body carries one.
fn read_failure(status: reqwest::StatusCode, body: &str) -> ServiceError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => ServiceError::Application(parsed.error),
        Err(_) => ServiceError::Application(format!("HTTP {}", status.as_u16())),
    }
}

#[async_trait]
impl AssistantService for HttpAssistantClient {
    async fn chat(&self, message: &str, want_audio: bool) -> Result<Reply, ServiceError> {
        let response = self
            .http
            .post(self.url("/api/chat"))
            .json(&ChatRequest {
                message,
                want_audio,
            })
            .send()
            .await
            .map_err(send_error)?;
        read_reply(response).await
    }

    async fn chat_voice(
        &self,
        clip: &AudioClip,
        want_audio: bool,
    ) -> Result<Reply, ServiceError> {
        let response = self
            .http
            .post(self.url("/api/chat/voice"))
            .json(&VoiceRequest {
                audio: BASE64_STANDARD.encode(&clip.data),
                mime_type: &clip.mime_type,
                want_audio,
            })
            .send()
            .await
            .map_err(send_error)?;
        read_reply(response).await
    }

    async fn clear_history(&self) -> Result<(), ServiceError> {
        let response = self
            .http
            .post(self.url("/api/chat/clear"))
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.map_err(send_error)?;
        Err(read_failure(status, &body))
    }

    async fn features(&self) -> Result<RemoteFeatures, ServiceError> {
        let response = self
            .http
            .get(self.url("/api/status"))
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(send_error)?;
        if !status.is_success() {
            return Err(read_failure(status, &body));
        }
        let parsed: StatusResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::Application(format!("malformed status body: {e}")))?;
        Ok(parsed.features)
    }

    async fn health(&self) -> Result<bool, ServiceError> {
        let response = self
            .http
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(send_error)?;
        if !status.is_success() {
            return Err(read_failure(status, &body));
        }
        let parsed: HealthResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::Application(format!("malformed health body: {e}")))?;
        Ok(parsed.llm_client_initialized)
    }
}

// =============================================================================
// Tests
// =============================================================================
