//! Relay service implementations

pub mod chat_backend;
pub mod problem_api;

#[cfg(test)]
pub mod tests;

pub use chat_backend::*;
pub use problem_api::*;
