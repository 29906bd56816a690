use codeaid::{CodeaidError, Goal, ModelClient, ModelSettings, OpenAiClient, Request};
use httpmock::prelude::*;

fn settings(endpoint: String) -> ModelSettings {
    ModelSettings {
        api_key: "sk-test".to_string(),
        model: "gpt-4o".to_string(),
        endpoint,
    }
}

fn request(prompt: &str) -> Request {
    Request {
        goal: Goal::Summarize,
        prompt: prompt.to_string(),
    }
}

#[test]
fn test_chat_completion_round_trip() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer sk-test")
            .json_body(serde_json::json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "Summarize: print(1)"}]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "A Python one-liner that prints 1."},
                    "finish_reason": "stop"
                }]
            }));
    });

    let client = OpenAiClient::new(settings(server.url("/v1"))).unwrap();
    let response = client.complete(&request("Summarize: print(1)")).unwrap();

    api_mock.assert();
    assert_eq!(response.text, "A Python one-liner that prints 1.");
}

#[test]
fn test_error_status_is_request_failed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(401)
            .header("Content-Type", "application/json")
            .body(r#"{"error":{"message":"Incorrect API key provided"}}"#);
    });

    let client = OpenAiClient::new(settings(server.base_url())).unwrap();
    let err = client.complete(&request("x")).unwrap_err();

    api_mock.assert();
    match err {
        CodeaidError::RequestFailed { message } => {
            assert!(message.contains("401"));
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_choices_is_request_failed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"choices": []}));
    });

    let client = OpenAiClient::new(settings(server.base_url())).unwrap();
    let result = client.complete(&request("x"));

    api_mock.assert();
    assert!(matches!(result, Err(CodeaidError::RequestFailed { .. })));
}

#[test]
fn test_malformed_body_is_request_failed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).body("not json");
    });

    let client = OpenAiClient::new(settings(server.base_url())).unwrap();
    let result = client.complete(&request("x"));

    api_mock.assert();
    assert!(matches!(result, Err(CodeaidError::RequestFailed { .. })));
}

#[test]
fn test_unreachable_endpoint_is_request_failed() {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let client = OpenAiClient::new(settings("http://127.0.0.1:9".to_string())).unwrap();
    assert!(matches!(
        client.complete(&request("x")),
        Err(CodeaidError::RequestFailed { .. })
    ));
}
