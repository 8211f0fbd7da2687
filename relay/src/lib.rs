//! Mock-interview relay library
//!
//! HTTP glue between an interview frontend, a third-party problem-data API,
//! and a locally hosted chat-completion backend: load a problem, relay chat
//! turns with accumulated history, and produce a post-interview summary on
//! request.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;

// Re-export main types
pub use config::BackendConfig;
pub use error::{RelayError, RelayResult};
pub use state::{InterviewSession, SessionRegistry};

// Re-export trait definitions
pub use traits::{ChatBackend, ProblemApi};

// Re-export service implementations
pub use services::{LeetCodeApi, OllamaBackend};

// Re-export web surface
pub use web::{AppState, build_router};
