//! JSON request handlers
//!
//! Domain failures never surface as HTTP errors: every handler answers 200
//! with an `error` field, which is the contract the frontend was built
//! against. Full failure details stay in the server log.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::{dispatch, problem, summary};
use crate::error::RelayError;
use crate::state::SessionRegistry;
use crate::traits::{ChatBackend, ProblemApi};
use shared::{ChatTurn, Language};

/// Shared handler state with injected services
pub struct AppState<B, P> {
    pub registry: Arc<SessionRegistry>,
    pub backend: Arc<B>,
    pub problem_api: Arc<P>,
}

impl<B, P> Clone for AppState<B, P> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            backend: self.backend.clone(),
            problem_api: self.problem_api.clone(),
        }
    }
}

fn error_response(context: &str, err: &RelayError) -> Json<Value> {
    error!("❌ {} failed: {}", context, err);
    Json(json!({ "error": err.to_string() }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub problem_description: String,
    pub session_id: Option<String>,
}

/// Load a problem by ID or URL and store it as the session's context
pub async fn set_problem<B, P>(
    State(state): State<AppState<B, P>>,
    Json(request): Json<ProblemRequest>,
) -> Json<Value>
where
    B: ChatBackend + 'static,
    P: ProblemApi + 'static,
{
    match problem::load_problem(state.problem_api.as_ref(), &request.problem_description).await {
        Ok((problem, raw)) => {
            let session = state.registry.session(request.session_id.as_deref()).await;
            session.lock().await.set_problem(problem.clone());
            info!("✅ Loaded problem '{}' ({})", problem.title, problem.difficulty);

            Json(json!({
                "problem": { "title": problem.title, "description": problem.description },
                "raw": raw,
            }))
        }
        Err(err) => error_response("Problem load", &err),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
    pub session_id: Option<String>,
}

/// Select the interview language; unrecognized names pass through verbatim
pub async fn set_language<B, P>(
    State(state): State<AppState<B, P>>,
    Json(request): Json<LanguageRequest>,
) -> Json<Value>
where
    B: ChatBackend + 'static,
    P: ProblemApi + 'static,
{
    let language = Language::from_name(&request.language);
    let session = state.registry.session(request.session_id.as_deref()).await;
    session.lock().await.set_language(language.clone());
    info!("🔤 Interview language set to {}", language);

    Json(json!({
        "language": request.language,
        "message": format!("Interview language set to {}", language.display_name()),
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    pub language: Option<String>,
    pub session_id: Option<String>,
}

/// Relay one chat turn through the model backend
pub async fn ask<B, P>(State(state): State<AppState<B, P>>, Json(request): Json<AskRequest>) -> Json<Value>
where
    B: ChatBackend + 'static,
    P: ProblemApi + 'static,
{
    let session = state.registry.session(request.session_id.as_deref()).await;

    match dispatch::process_turn(
        state.backend.as_ref(),
        session.as_ref(),
        &request.message,
        request.language.as_deref(),
    )
    .await
    {
        Ok(response) => Json(json!({ "response": response })),
        Err(err) => error_response("Turn dispatch", &err),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub chat_history: Vec<ChatTurn>,
    pub problem_title: String,
}

/// Generate a post-interview summary from a caller-supplied transcript
pub async fn summarize_interview<B, P>(
    State(state): State<AppState<B, P>>,
    Json(request): Json<SummarizeRequest>,
) -> Json<Value>
where
    B: ChatBackend + 'static,
    P: ProblemApi + 'static,
{
    match summary::summarize(state.backend.as_ref(), &request.chat_history, &request.problem_title).await {
        Ok(response) => Json(json!({ "response": response })),
        Err(err) => error_response("Summary generation", &err),
    }
}

/// Health check endpoint
pub async fn health_check<B, P>(State(state): State<AppState<B, P>>) -> Json<Value>
where
    B: ChatBackend + 'static,
    P: ProblemApi + 'static,
{
    Json(json!({
        "status": "healthy",
        "sessions": state.registry.session_count().await,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
