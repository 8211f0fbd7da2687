//! Problem input normalization and loading

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RelayError, RelayResult};
use crate::traits::ProblemApi;
use shared::ProblemContext;

/// Difficulty used when the upstream API reports none
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/problems/([^/?]+)").expect("slug pattern is valid"));

/// Normalize raw user input into a problem-API query key
///
/// Purely numeric input is used as a direct identifier. A URL containing a
/// `/problems/` segment resolves to the slug between `/problems/` and the
/// next `/` or `?`. Everything else is rejected.
pub fn parse_problem_input(input: &str) -> RelayResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RelayError::EmptyInput);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Ok(trimmed.to_string());
    }

    if trimmed.contains("/problems/") {
        if let Some(captures) = SLUG_RE.captures(trimmed) {
            return Ok(captures[1].to_string());
        }
        return Err(RelayError::InvalidFormat);
    }

    Err(RelayError::InvalidFormat)
}

/// Resolve the input, fetch problem data, and build the context
///
/// Returns the structured context plus the raw markup description for the
/// caller. Storing the context into a session is the handler's job.
pub async fn load_problem(api: &dyn ProblemApi, input: &str) -> RelayResult<(ProblemContext, String)> {
    let query = parse_problem_input(input)?;
    let response = api.fetch(&query).await?;

    let title = response
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| format!("Problem {}", input.trim()));
    let description = response.content.unwrap_or_default();
    let difficulty = response
        .difficulty
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_DIFFICULTY.to_string());

    let problem = ProblemContext::new(title, description.clone(), difficulty);
    Ok((problem, description))
}
