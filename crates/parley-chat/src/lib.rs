//! Session engine for the Parley assistant frontend.
//!
//! Provides keyword-based category classification, remote-vs-fallback
//! response resolution, and the turn-taking session controller that owns
//! conversation history and the pending/recording guards.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod responder;
pub mod session;
pub mod transcript;
pub mod voice;

pub use catalog::ResponseCatalog;
pub use classify::{classify, Category};
pub use error::ChatError;
pub use responder::{RandomSource, ResponseResolver, ThreadRngSource};
pub use session::SessionController;
pub use transcript::{NullTranscript, Transcript};
pub use voice::{AudioRecorder, MockRecorder};
