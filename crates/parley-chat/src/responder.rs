//! Response resolution: remote call first, local fallback second.
//!
//! The resolver owns the decision between the remote assistant service and
//! the canned-response catalog. Transport failures fall back locally;
//! application failures propagate so the user sees them. Randomness (pool
//! pick, simulated latency) comes from an injected source so tests can be
//! deterministic.

use std::sync::Arc;
use std::time::Duration;

use parley_core::config::ChatConfig;
use parley_core::{AssistantService, AudioClip, Reply, ServiceError};
use rand::Rng;
use tracing::{debug, warn};

use crate::catalog::ResponseCatalog;
use crate::classify::classify;
use crate::error::ChatError;

// =============================================================================
// Random source
// =============================================================================

/// Source of the resolver's two random draws: the pool index and the
/// simulated round-trip delay.
pub trait RandomSource: Send {
    /// Pick an index uniformly in `0..len`. `len` is always >= 1.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Draw a delay in milliseconds, uniform in `min..max`.
    fn delay_ms(&mut self, min: u64, max: u64) -> u64;
}

/// Production random source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn delay_ms(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..max)
    }
}

// =============================================================================
// ResponseResolver
// =============================================================================

/// Resolves a user submission into a [`Reply`], remotely when possible and
/// locally when the service is unreachable.
pub struct ResponseResolver<S: AssistantService> {
    service: Arc<S>,
    rng: Box<dyn RandomSource>,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl<S: AssistantService> ResponseResolver<S> {
    /// Create a resolver over the given service and random source.
    pub fn new(service: Arc<S>, rng: Box<dyn RandomSource>, config: &ChatConfig) -> Self {
        Self {
            service,
            rng,
            delay_min_ms: config.fallback_delay_min_ms,
            delay_max_ms: config.fallback_delay_max_ms,
        }
    }

    /// Resolve a text submission.
    ///
    /// A remote reply is authoritative and returned verbatim. An in-band
    /// application error propagates as [`ChatError::Application`]. Only a
    /// transport failure triggers the local canned-response fallback.
    pub async fn resolve_text(
        &mut self,
        text: &str,
        want_audio: bool,
    ) -> Result<Reply, ChatError> {
        match self.service.chat(text, want_audio).await {
            Ok(reply) => Ok(reply),
            Err(ServiceError::Application(msg)) => Err(ChatError::Application(msg)),
            Err(ServiceError::Transport(reason)) => {
                warn!(%reason, "assistant service unreachable; using local fallback");
                Ok(self.fallback(text).await)
            }
        }
    }

    /// Resolve a voice submission.
    ///
    /// No local fallback exists for audio: any failure surfaces as
    /// [`ChatError::VoiceProcessing`].
    pub async fn resolve_voice(
        &mut self,
        clip: &AudioClip,
        want_audio: bool,
    ) -> Result<Reply, ChatError> {
        self.service
            .chat_voice(clip, want_audio)
            .await
            .map_err(|e| ChatError::VoiceProcessing(e.to_string()))
    }

    /// Synthesize a reply from the canned-response pool for the text's
    /// category, after a simulated round-trip delay.
    async fn fallback(&mut self, text: &str) -> Reply {
        let category = classify(text);
        let pool = ResponseCatalog::pool(category);
        let index = self.rng.pick_index(pool.len());
        let delay = self.rng.delay_ms(self.delay_min_ms, self.delay_max_ms);
        debug!(category = %category, index, delay_ms = delay, "fallback reply selected");

        tokio::time::sleep(Duration::from_millis(delay)).await;
        Reply::text_only(ResponseCatalog::render(category, index))
    }
}

// =============================================================================
// Tests
// =============================================================================
