//! Test helper utilities for relay integration tests

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relay::services::{LeetCodeApi, OllamaBackend};
use relay::state::SessionRegistry;
use relay::web::{AppState, build_router};

/// Spawn the relay router on an ephemeral port, wired to fake upstreams
pub async fn spawn_relay(chat_server: &MockServer, problem_server: &MockServer) -> SocketAddr {
    let state = AppState {
        registry: Arc::new(SessionRegistry::new()),
        backend: Arc::new(OllamaBackend::new(chat_server.uri(), "llama3", Duration::from_secs(5))),
        problem_api: Arc::new(LeetCodeApi::new(problem_server.uri(), Duration::from_secs(2))),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Mount a canned reply on the fake model backend
pub async fn mount_chat_reply(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": reply }
        })))
        .mount(server)
        .await;
}

/// Mount canned problem data on the fake problem API
pub async fn mount_problem(server: &MockServer, query: &str, title: &str, difficulty: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/problem/{query}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": title,
            "content": content,
            "difficulty": difficulty,
        })))
        .mount(server)
        .await;
}

/// POST a JSON body to the relay and parse the JSON reply
pub async fn post_json(addr: SocketAddr, route: &str, body: Value) -> Value {
    let client = reqwest::Client::new();
    client
        .post(format!("http://{addr}{route}"))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

/// Message sequences sent to the fake model backend, oldest first
pub async fn chat_requests(server: &MockServer) -> Vec<Vec<Value>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == "/api/chat")
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            body["messages"].as_array().unwrap().clone()
        })
        .collect()
}
