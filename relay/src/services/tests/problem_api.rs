//! Tests for the problem-data API client

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::RelayError;
use crate::services::problem_api::LeetCodeApi;
use crate::traits::ProblemApi;

fn api_for(server: &MockServer) -> LeetCodeApi {
    LeetCodeApi::new(server.uri(), Duration::from_secs(2))
}

#[tokio::test]
async fn test_fetch_maps_upstream_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/problem/valid-anagram"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Valid Anagram",
            "content": "<p>Given two strings s and t...</p>",
            "difficulty": "Easy"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let response = api.fetch("valid-anagram").await.unwrap();

    assert_eq!(response.title.as_deref(), Some("Valid Anagram"));
    assert_eq!(response.difficulty.as_deref(), Some("Easy"));
    assert!(response.content.unwrap().contains("Given two strings"));
}

#[tokio::test]
async fn test_fetch_tolerates_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/problem/242"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "Valid Anagram"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let response = api.fetch("242").await.unwrap();

    assert_eq!(response.title.as_deref(), Some("Valid Anagram"));
    assert!(response.content.is_none());
    assert!(response.difficulty.is_none());
}

#[tokio::test]
async fn test_fetch_maps_http_error_to_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/problem/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.fetch("missing").await.unwrap_err();

    match err {
        RelayError::FetchFailed { message } => assert!(message.contains("404")),
        other => panic!("expected FetchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_hides_parse_errors_behind_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/problem/242"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.fetch("242").await.unwrap_err();

    match err {
        RelayError::FetchFailed { message } => assert_eq!(message, "invalid response from problem API"),
        other => panic!("expected FetchFailed, got {other:?}"),
    }
}
