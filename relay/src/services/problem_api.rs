//! Third-party problem-data API client

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::error::{RelayError, RelayResult};
use crate::traits::{ProblemApi, ProblemApiResponse};

/// Default base URL of the unofficial problem-data API
pub const DEFAULT_PROBLEM_API_URL: &str = "https://leetcode-api-pied.vercel.app";

/// Default bound on one problem fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Real problem fetcher over `GET {base}/problem/{query}`
pub struct LeetCodeApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl LeetCodeApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl Default for LeetCodeApi {
    fn default() -> Self {
        Self::new(DEFAULT_PROBLEM_API_URL, DEFAULT_FETCH_TIMEOUT)
    }
}

#[async_trait]
impl ProblemApi for LeetCodeApi {
    async fn fetch(&self, query: &str) -> RelayResult<ProblemApiResponse> {
        let url = format!("{}/problem/{}", self.base_url, query);
        info!("📥 Fetching problem from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| RelayError::FetchFailed { message: e.to_string() })?;

        if !response.status().is_success() {
            return Err(RelayError::FetchFailed {
                message: format!("problem API returned HTTP {}", response.status().as_u16()),
            });
        }

        // Raw deserialization failures stay server-side; the caller only
        // sees a generic message
        let body: ProblemApiResponse = response.json().await.map_err(|_| RelayError::FetchFailed {
            message: "invalid response from problem API".to_string(),
        })?;

        Ok(body)
    }
}
