#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;
use odinview_server::{api::app_router, build_state, config::Config};

/// Config for a temp-dir database and the in-memory vault, with `overrides`
/// applied on top.
pub fn test_config(overrides: &[(&str, &str)]) -> (TempDir, Config) {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("test.db").to_string_lossy().into_owned();
    let mut vars: HashMap<String, String> = [
        ("OV_DB_PATH", db_path),
        ("OV_SECRET_BACKEND", "memory".to_string()),
        ("OV_CHAT_LATENCY_MS", "0".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
    (tmp, config)
}

/// Router backed by a temp-dir database and the in-memory vault.
pub async fn build_test_router() -> (TempDir, Router) {
    let (tmp, config) = test_config(&[]);
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state, &config))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}
