//! Service trait definitions for dependency injection
//!
//! All upstream I/O is abstracted through these traits for testability

use async_trait::async_trait;

use crate::error::RelayResult;
use shared::ChatTurn;

/// Chat-completion backend service trait
#[mockall::automock]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a full message sequence and return the reply content
    ///
    /// Non-streaming, single attempt. A reply with no content field comes
    /// back as an empty string; callers decide how to recover.
    async fn chat(&self, messages: &[ChatTurn]) -> RelayResult<String>;

    /// Probe the backend for reachability
    async fn probe(&self) -> RelayResult<()>;
}

/// Third-party problem-data API service trait
#[mockall::automock]
#[async_trait]
pub trait ProblemApi: Send + Sync {
    /// Fetch problem data by identifier or slug
    async fn fetch(&self, query: &str) -> RelayResult<ProblemApiResponse>;
}

/// Raw problem data as returned by the upstream API
///
/// Every field is optional upstream; defaults are applied by the loader.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProblemApiResponse {
    pub title: Option<String>,
    pub content: Option<String>,
    pub difficulty: Option<String>,
}
