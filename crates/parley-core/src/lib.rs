//! Parley core crate - shared types, configuration, and service contracts.
//!
//! Defines the data model for conversation turns, the TOML configuration,
//! the error taxonomy, and the `AssistantService` trait that the session
//! engine consumes and the HTTP client crate implements.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod types;

pub use config::ParleyConfig;
pub use error::{ParleyError, Result};
pub use service::{AssistantService, ServiceError};
pub use types::*;
