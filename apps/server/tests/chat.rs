mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{build_test_router, send};

#[tokio::test]
async fn chat_requires_a_configured_key() {
    let (_tmp, app) = build_test_router().await;
    let conversation = json!({ "messages": [{ "role": "user", "content": "hello" }] });

    let (status, body) = send(&app, Method::POST, "/api/v1/chat", Some(conversation.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "API keys are not configured. Please set them in the settings."
    );

    send(
        &app,
        Method::POST,
        "/api/v1/keys",
        Some(json!({ "service": "openai", "apiKey": "sk-test123456789" })),
    )
    .await;

    let (status, reply) = send(&app, Method::POST, "/api/v1/chat", Some(conversation)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["role"], "assistant");
    assert_eq!(
        reply["content"],
        "This is a mocked response from the AI. The real API call is not yet implemented."
    );

    let (status, _) = send(&app, Method::POST, "/api/v1/chat", Some(json!({ "messages": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
