//! Presentation seam.
//!
//! The session controller holds no rendering logic; everything the user
//! sees goes through this trait. A real frontend implements it against its
//! message list; [`NullTranscript`] serves headless embedding and tests.

use parley_core::Message;

/// Sink for everything the session wants rendered.
pub trait Transcript: Send {
    /// Append a message to the visible conversation thread.
    fn append(&mut self, message: &Message);

    /// Show the typing indicator for the in-flight turn.
    fn show_pending(&mut self);

    /// Remove the typing indicator.
    fn clear_pending(&mut self);

    /// Clear the thread and restore the initial placeholder state.
    fn reset(&mut self);
}

/// No-op transcript for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranscript;

impl Transcript for NullTranscript {
    fn append(&mut self, _message: &Message) {}
    fn show_pending(&mut self) {}
    fn clear_pending(&mut self) {}
    fn reset(&mut self) {}
}
