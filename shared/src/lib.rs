//! Shared types for the mock-interview relay
//!
//! Contains the chat/problem domain types exchanged between the HTTP surface
//! and the core logic, plus the common tracing setup. Component-internal
//! types (request/response bodies, service responses) live in the relay
//! crate itself.

pub mod logging;
pub mod types;

pub use types::*;
