//! Interview session state
//!
//! One `InterviewSession` per logical interview, owned by a registry keyed
//! on a caller-supplied identifier. Callers that send no identifier share
//! the default session, which keeps the single-client wire contract working
//! unchanged. Access to a session is serialized through its mutex; one
//! dispatched turn holds the lock for the whole read-history/append-reply
//! sequence.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use shared::{ChatTurn, Language, ProblemContext};

/// State of one logical interview session
#[derive(Debug)]
pub struct InterviewSession {
    transcript: Vec<ChatTurn>,
    problem: Option<ProblemContext>,
    language: Language,
}

impl InterviewSession {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            problem: None,
            language: Language::Python,
        }
    }

    /// Ordered dialogue history, oldest first
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn transcript_len(&self) -> usize {
        self.transcript.len()
    }

    /// Append one turn; turns are never edited or reordered afterwards
    pub fn push_turn(&mut self, turn: ChatTurn) {
        self.transcript.push(turn);
    }

    pub fn problem(&self) -> Option<&ProblemContext> {
        self.problem.as_ref()
    }

    /// Replace the loaded problem wholesale; prior context is not merged
    pub fn set_problem(&mut self, problem: ProblemContext) {
        self.problem = Some(problem);
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Clear transcript and problem context; the language selection survives
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.problem = None;
    }
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of interview sessions keyed by caller-supplied identifier
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Arc<Mutex<InterviewSession>>>>,
}

impl SessionRegistry {
    /// Session key used when the caller sends no `session_id`
    pub const DEFAULT_SESSION: &'static str = "default";

    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a session by identifier, creating it on first use
    pub async fn session(&self, id: Option<&str>) -> Arc<Mutex<InterviewSession>> {
        let key = id.unwrap_or(Self::DEFAULT_SESSION);

        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(key) {
                return session.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(InterviewSession::new())))
            .clone()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_session_is_shared() {
        let registry = SessionRegistry::new();

        let a = registry.session(None).await;
        let b = registry.session(Some(SessionRegistry::DEFAULT_SESSION)).await;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_get_distinct_sessions() {
        let registry = SessionRegistry::new();

        let a = registry.session(Some("alice")).await;
        let b = registry.session(Some("bob")).await;
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.session_count().await, 2);

        a.lock().await.push_turn(ChatTurn::user("hi"));
        assert_eq!(a.lock().await.transcript_len(), 1);
        assert_eq!(b.lock().await.transcript_len(), 0);
    }

    #[test]
    fn test_reset_clears_transcript_and_problem_but_keeps_language() {
        let mut session = InterviewSession::new();
        session.push_turn(ChatTurn::user("hello"));
        session.push_turn(ChatTurn::assistant("hi"));
        session.set_problem(ProblemContext::new("Two Sum", "desc", "Easy"));
        session.set_language(Language::Go);

        session.reset();

        assert_eq!(session.transcript_len(), 0);
        assert!(session.problem().is_none());
        assert_eq!(session.language(), &Language::Go);
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut session = InterviewSession::new();
        session.push_turn(ChatTurn::user("first"));
        session.push_turn(ChatTurn::assistant("second"));

        let contents: Vec<&str> = session.transcript().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }
}
