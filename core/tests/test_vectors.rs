//! Verify every posts operation against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, the expected outgoing request, a
//! simulated response, and the expected result or error. A replay transport
//! captures the request and answers with the simulated response. Comparing
//! parsed JSON (not raw strings) avoids false negatives from field ordering.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use posts_core::{
    ApiClient, ClientConfig, HttpMethod, HttpRequest, HttpResponse, Post, PostsClient,
    RequestFailure, Transport,
};

const BASE_URL: &str = "http://localhost:3000";

/// Answers with one simulated response and keeps the request it was given.
struct Replay {
    response: HttpResponse,
    seen: Mutex<Vec<HttpRequest>>,
}

#[async_trait]
impl Transport for Replay {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestFailure> {
        self.seen.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

fn replay(case: &serde_json::Value) -> Arc<Replay> {
    let sim = &case["simulated_response"];
    Arc::new(Replay {
        response: HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        },
        seen: Mutex::new(Vec::new()),
    })
}

fn client(transport: &Arc<Replay>) -> PostsClient<Arc<Replay>> {
    PostsClient::new(ApiClient::new(ClientConfig::new(BASE_URL), Arc::clone(transport)))
}

fn load(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Assert the single captured request matches `expected_request`.
fn check_request(name: &str, transport: &Replay, case: &serde_json::Value) {
    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "{name}: exactly one request");
    let req = &seen[0];
    let expected = &case["expected_request"];

    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match (&req.body, &expected["body"]) {
        (None, serde_json::Value::Null) => {}
        (Some(body), expected_body) if !expected_body.is_null() => {
            let body: serde_json::Value = serde_json::from_str(body).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        (actual, expected_body) => {
            panic!("{name}: body mismatch, got {actual:?}, expected {expected_body}")
        }
    }
}

/// Assert the operation outcome matches `expected_result` or `expected_error`.
fn check_outcome<R>(name: &str, result: Result<R, RequestFailure>, case: &serde_json::Value)
where
    R: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let expected_status = expected_error["status"].as_u64().unwrap() as u16;
        match result.unwrap_err() {
            RequestFailure::Status { status, .. } => {
                assert_eq!(status, expected_status, "{name}: error status")
            }
            other => panic!("{name}: expected status error, got {other:?}"),
        }
    } else {
        let expected: R = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result.unwrap(), expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_test_vectors() {
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        let transport = replay(&case);

        let result = client(&transport).get_post_list().await;

        check_request(name, &transport, &case);
        check_outcome::<Vec<Post>>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_test_vectors() {
    for case in load(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let transport = replay(&case);

        let result = client(&transport).get_post(id).await;

        check_request(name, &transport, &case);
        check_outcome::<Post>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_test_vectors() {
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Post = serde_json::from_value(case["input"].clone()).unwrap();
        let transport = replay(&case);

        let result = client(&transport).create_post(&input).await;

        check_request(name, &transport, &case);
        check_outcome::<Post>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_test_vectors() {
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Post = serde_json::from_value(case["input"].clone()).unwrap();
        let transport = replay(&case);

        let result = client(&transport).update_post(&input).await;

        check_request(name, &transport, &case);
        check_outcome::<Post>(name, result, &case);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_test_vectors() {
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let transport = replay(&case);

        let result = client(&transport).delete_post(id).await;

        check_request(name, &transport, &case);
        check_outcome::<Post>(name, result, &case);
    }
}
