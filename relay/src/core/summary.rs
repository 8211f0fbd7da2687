//! Post-interview summary generation
//!
//! Stateless one-shot evaluation: the transcript comes from the caller, not
//! from session state, so a client-side-edited or cached history can be
//! summarized too.

use crate::error::{RelayError, RelayResult};
use crate::traits::ChatBackend;
use shared::ChatTurn;

/// Scoring dimensions of the evaluation rubric, each rated 0-10
pub const SUMMARY_DIMENSIONS: &[&str] = &[
    "Problem understanding",
    "Communication",
    "Algorithmic reasoning",
    "Code quality",
    "Complexity and edge cases",
];

/// Substituted when the model returns no summary content at all
pub const EMPTY_SUMMARY_NOTICE: &str = "No summary generated by the model backend.";

/// Render the one-shot evaluation prompt
///
/// The transcript is embedded verbatim as pretty-printed JSON so the model
/// sees exactly what the candidate saw.
pub fn render_summary_prompt(transcript: &[ChatTurn], problem_title: &str) -> RelayResult<String> {
    let serialized = serde_json::to_string_pretty(transcript)?;
    let breakdown = SUMMARY_DIMENSIONS
        .iter()
        .map(|dimension| format!("{dimension} /10"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "You are an expert AI interviewer. Summarize this coding interview for '{problem_title}':\n\n\
         === Chat History ===\n{serialized}\n\n\
         CRITICAL: Do NOT rate the code if the candidate did not write any.\n\
         Output in Markdown:\n\
         **Rating: X/10** (overall out of 10, with breakdown: {breakdown})\n\
         **Hire Recommendation:** Hire or No Hire, with a one-line justification.\n\
         **Strengths:** Concise positives (reasoning, communication, edge cases).\n\
         **Areas to Improve:** 2-3 tips to focus on next (e.g., 'Mock more test cases').\n\
         **Related Problems:** Suggest 3 similar practice problems with IDs and titles.\n\
         Keep it encouraging and professional."
    ))
}

/// Generate a post-interview summary; never mutates any session state
pub async fn summarize(backend: &dyn ChatBackend, transcript: &[ChatTurn], problem_title: &str) -> RelayResult<String> {
    let prompt = render_summary_prompt(transcript, problem_title).map_err(|e| RelayError::SummaryFailed {
        message: e.to_string(),
    })?;

    let messages = [ChatTurn::system(prompt)];
    let reply = backend
        .chat(&messages)
        .await
        .map_err(|e| RelayError::SummaryFailed { message: e.to_string() })?;

    if reply.trim().is_empty() {
        return Ok(EMPTY_SUMMARY_NOTICE.to_string());
    }
    Ok(reply)
}
