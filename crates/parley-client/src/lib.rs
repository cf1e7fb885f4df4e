//! HTTP implementation of the assistant service contract.
//!
//! Talks to the Parley backend over its JSON API and maps wire outcomes
//! onto [`parley_core::ServiceError`]: send-level failures become
//! `Transport`, everything the server said in-band becomes `Application`.

pub mod client;

pub use client::HttpAssistantClient;
