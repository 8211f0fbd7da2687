//! Turn dispatch
//!
//! Appends the incoming user turn, assembles the outbound sequence as
//! `[system] ++ transcript`, calls the chat backend, and stores the reply.
//! The system turn is rebuilt on every call and never stored, so a changed
//! language or a newly loaded problem reframes all prior turns as well.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::prompt::build_system_prompt;
use crate::error::RelayResult;
use crate::state::InterviewSession;
use crate::traits::ChatBackend;
use shared::{ChatTurn, Language};

/// Substituted when the model produces empty or whitespace-only output
pub const FALLBACK_NOTICE: &str = "Hmm, that didn't generate much. Try rephrasing your last message.";

/// Returned when a reset phrase clears the session
pub const RESET_NOTICE: &str = "Interview ended. The session has been cleared.";

/// Phrases that end the interview and clear session state
pub const RESET_PHRASES: &[&str] = &["end interview", "stop", "reset"];

/// Check whether a user message is a session-reset command
///
/// Exact match after trimming and lowercasing, so ordinary sentences that
/// merely contain "stop" keep flowing to the model.
pub fn is_reset_command(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    RESET_PHRASES.iter().any(|phrase| normalized == *phrase)
}

/// Process one user turn against a session
///
/// The session lock spans the whole read-history/append-reply sequence, so a
/// turn is atomic per session. On backend failure the user turn stays
/// appended and no assistant turn is stored.
pub async fn process_turn(
    backend: &dyn ChatBackend,
    session: &Mutex<InterviewSession>,
    user_message: &str,
    language: Option<&str>,
) -> RelayResult<String> {
    let mut session = session.lock().await;

    if let Some(name) = language {
        let selected = Language::from_name(name);
        if session.language() != &selected {
            info!("🔤 Switching interview language to {}", selected);
            session.set_language(selected);
        }
    }

    if is_reset_command(user_message) {
        info!("🧹 Reset command received, clearing session state");
        session.reset();
        return Ok(RESET_NOTICE.to_string());
    }

    session.push_turn(ChatTurn::user(user_message));

    let system_prompt = build_system_prompt(session.language().display_name(), session.problem());
    let mut messages = Vec::with_capacity(session.transcript_len() + 1);
    messages.push(ChatTurn::system(system_prompt));
    messages.extend_from_slice(session.transcript());

    let reply = backend.chat(&messages).await?;

    let reply = if reply.trim().is_empty() {
        warn!("⚠️ Model backend returned empty output, substituting fallback notice");
        FALLBACK_NOTICE.to_string()
    } else {
        reply
    };

    session.push_turn(ChatTurn::assistant(reply.clone()));
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::traits::MockChatBackend;
    use shared::{ChatRole, ProblemContext};

    fn session() -> Mutex<InterviewSession> {
        Mutex::new(InterviewSession::new())
    }

    #[tokio::test]
    async fn test_successful_turn_appends_user_and_assistant() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_chat()
            .returning(|_| Ok("What's your first instinct here?".to_string()));

        let session = session();
        let reply = process_turn(&backend, &session, "I'd sort the array", None).await.unwrap();

        assert_eq!(reply, "What's your first instinct here?");
        let session = session.lock().await;
        assert_eq!(session.transcript_len(), 2);
        assert_eq!(session.transcript()[0].role, ChatRole::User);
        assert_eq!(session.transcript()[1].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_outbound_sequence_is_system_plus_transcript() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_chat()
            .withf(|messages| {
                messages[0].role == ChatRole::System
                    && messages[0].content.contains("Rust")
                    && messages[0].content.contains("Two Sum")
                    && messages[1..].iter().all(|turn| turn.role != ChatRole::System)
            })
            .returning(|_| Ok("ok".to_string()));

        let session = session();
        {
            let mut guard = session.lock().await;
            guard.set_problem(ProblemContext::new("Two Sum", "desc", "Easy"));
        }

        process_turn(&backend, &session, "hello", Some("Rust")).await.unwrap();

        // The recomputed system turn must not leak into the stored transcript
        let session = session.lock().await;
        assert!(session.transcript().iter().all(|turn| turn.role != ChatRole::System));
        assert_eq!(session.language(), &Language::Rust);
    }

    #[tokio::test]
    async fn test_empty_model_output_becomes_fallback_notice() {
        let mut backend = MockChatBackend::new();
        backend.expect_chat().returning(|_| Ok("   \n".to_string()));

        let session = session();
        let reply = process_turn(&backend, &session, "hello", None).await.unwrap();

        assert_eq!(reply, FALLBACK_NOTICE);
        let session = session.lock().await;
        assert_eq!(session.transcript_len(), 2);
        assert_eq!(session.transcript()[1].content, FALLBACK_NOTICE);
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_user_turn_only() {
        let mut backend = MockChatBackend::new();
        backend.expect_chat().returning(|_| {
            Err(RelayError::BackendUnreachable {
                message: "connection refused".to_string(),
            })
        });

        let session = session();
        let err = process_turn(&backend, &session, "hello", None).await.unwrap_err();

        assert!(matches!(err, RelayError::BackendUnreachable { .. }));
        let session = session.lock().await;
        assert_eq!(session.transcript_len(), 1);
        assert_eq!(session.transcript()[0].role, ChatRole::User);
    }

    #[tokio::test]
    async fn test_reset_command_clears_session_without_calling_backend() {
        let mut backend = MockChatBackend::new();
        backend.expect_chat().times(0);

        let session = session();
        {
            let mut guard = session.lock().await;
            guard.push_turn(ChatTurn::user("earlier"));
            guard.push_turn(ChatTurn::assistant("reply"));
            guard.set_problem(ProblemContext::new("Two Sum", "desc", "Easy"));
        }

        let reply = process_turn(&backend, &session, "  End Interview  ", None).await.unwrap();

        assert_eq!(reply, RESET_NOTICE);
        let session = session.lock().await;
        assert_eq!(session.transcript_len(), 0);
        assert!(session.problem().is_none());
    }

    #[test]
    fn test_reset_command_detection() {
        assert!(is_reset_command("reset"));
        assert!(is_reset_command(" STOP "));
        assert!(is_reset_command("End Interview"));
        assert!(!is_reset_command("please stop giving hints"));
        assert!(!is_reset_command("how do I reset a HashMap?"));
    }

    #[tokio::test]
    async fn test_language_override_sticks_for_later_turns() {
        let mut backend = MockChatBackend::new();
        backend.expect_chat().returning(|_| Ok("ok".to_string()));

        let session = session();
        process_turn(&backend, &session, "hello", Some("Go")).await.unwrap();

        let mut later = MockChatBackend::new();
        later
            .expect_chat()
            .withf(|messages| messages[0].content.contains("Go"))
            .returning(|_| Ok("ok".to_string()));
        process_turn(&later, &session, "next", None).await.unwrap();
    }
}
