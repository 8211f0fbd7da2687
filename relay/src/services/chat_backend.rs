//! Chat backend client speaking the Ollama HTTP API

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::error::{RelayError, RelayResult};
use crate::traits::ChatBackend;
use shared::ChatTurn;

/// Default bound on one chat-completion round trip
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(120);

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Real chat backend over `POST {endpoint}/api/chat`
pub struct OllamaBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl OllamaBackend {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    async fn chat(&self, messages: &[ChatTurn]) -> RelayResult<String> {
        let request_body = json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        });

        debug!("🤖 Sending {} turns to model backend at {}", messages.len(), self.endpoint);

        let response = self
            .client
            .post(format!("{}/api/chat", self.endpoint))
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RelayError::BackendUnreachable { message: e.to_string() })?;

        if !response.status().is_success() {
            return Err(RelayError::BackendError {
                status: response.status().as_u16(),
            });
        }

        let response_json: serde_json::Value = response.json().await.map_err(|_| RelayError::BackendUnreachable {
            message: "invalid response body from model backend".to_string(),
        })?;

        // A reply without message.content counts as empty output, not a failure
        let content = response_json
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .unwrap_or_default();

        Ok(content.to_string())
    }

    async fn probe(&self) -> RelayResult<()> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.endpoint))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| RelayError::BackendUnreachable { message: e.to_string() })?;

        if !response.status().is_success() {
            return Err(RelayError::BackendError {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
