mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;

use odinview_core::{
    credentials::{CredentialService, CredentialServiceTrait, SecretStore},
    errors::Error,
    Result,
};
use odinview_server::{api::app_router, build_state, build_state_with};

use common::{build_test_router, send, test_config};

/// Vault that refuses every call, as a locked keychain does.
struct DeniedStore;

impl SecretStore for DeniedStore {
    fn set_secret(&self, _service: &str, _account: &str, _secret: &str) -> Result<()> {
        Err(Error::StoreUnavailable("Keychain access denied".into()))
    }

    fn get_secret(&self, _service: &str, _account: &str) -> Result<Option<String>> {
        Err(Error::StoreUnavailable("Keychain access denied".into()))
    }

    fn delete_secret(&self, _service: &str, _account: &str) -> Result<bool> {
        Err(Error::StoreUnavailable("Keychain access denied".into()))
    }
}

#[tokio::test]
async fn healthz_answers_ok() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/healthz", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn ipc_key_lifecycle() {
    let (_tmp, app) = build_test_router().await;

    let (status, saved) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:save", "service": "ipc-openai", "apiKey": "sk-test123456789" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved, json!({ "success": true }));

    let (_, fetched) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:get", "service": "ipc-openai" })),
    )
    .await;
    assert_eq!(fetched, json!({ "success": true, "data": "sk-test123456789" }));

    let (_, deleted) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:delete", "service": "ipc-openai" })),
    )
    .await;
    assert_eq!(deleted, json!({ "success": true, "data": "deleted" }));

    let (_, absent) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:get", "service": "ipc-openai" })),
    )
    .await;
    assert_eq!(absent, json!({ "success": true, "data": null }));

    let (_, again) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:delete", "service": "ipc-openai" })),
    )
    .await;
    assert_eq!(again, json!({ "success": true, "data": "not_found" }));
}

#[tokio::test]
async fn rest_key_routes_share_the_vault() {
    let (_tmp, app) = build_test_router().await;

    let (status, saved) = send(
        &app,
        Method::POST,
        "/api/v1/keys",
        Some(json!({ "service": "rest-gemini", "apiKey": "gm-first" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["success"], true);

    send(
        &app,
        Method::POST,
        "/api/v1/keys",
        Some(json!({ "service": "rest-gemini", "apiKey": "gm-second" })),
    )
    .await;

    let (_, fetched) = send(&app, Method::GET, "/api/v1/keys/rest-gemini", None).await;
    assert_eq!(fetched, json!({ "success": true, "data": "gm-second" }));

    let (status, deleted) = send(&app, Method::DELETE, "/api/v1/keys/rest-gemini", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"], "deleted");
}

#[tokio::test]
async fn unknown_channel_fails_inside_the_envelope() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:rotate", "service": "openai" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn non_string_api_key_is_not_echoed() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/keys",
        Some(json!({ "service": "openai", "apiKey": 987654321 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "error": "Invalid request body" }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/ipc",
        Some(json!({ "channel": "key:save", "service": "openai", "apiKey": 987654321 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(!body.to_string().contains("987654321"));
}

#[tokio::test]
async fn denied_save_fails_inside_the_envelope() {
    let (_tmp, config) = test_config(&[]);
    let credentials = Arc::new(CredentialService::new(Arc::new(DeniedStore)));
    let state = build_state_with(&config, credentials).await.unwrap();
    let app = app_router(state, &config);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/keys",
        Some(json!({ "service": "openai", "apiKey": "sk-test123456789" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains("sk-test123456789"));
}

#[tokio::test]
async fn each_state_uses_its_own_service_name() {
    let (_tmp_a, default_config) = test_config(&[]);
    let (_tmp_b, other_config) = test_config(&[("OV_SERVICE_NAME", "OdinView-Other")]);

    let default_state = build_state(&default_config).await.unwrap();
    let other_state = build_state(&other_config).await.unwrap();

    assert_eq!(default_state.credential_service.service_name(), "OdinView");
    assert_eq!(other_state.credential_service.service_name(), "OdinView-Other");

    default_state
        .credential_service
        .save_secret("openai", "sk-default")
        .await
        .unwrap();
    assert_eq!(
        other_state.credential_service.get_secret("openai").await.unwrap(),
        None
    );
}
