//! Request/response contract between the UI process and the trusted back end.
//!
//! The UI never sees an error type: every handler folds failures into
//! `{ success: false, error }` so the caller only learns that the call failed
//! and why. Secret values are scrubbed from error text and never logged.

use log::error;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::credentials::CredentialServiceTrait;
use crate::errors::Error;

/// Channel saving an API key.
pub const KEY_SAVE: &str = "key:save";
/// Channel reading an API key.
pub const KEY_GET: &str = "key:get";
/// Channel deleting an API key.
pub const KEY_DELETE: &str = "key:delete";

const UNKNOWN_ERROR: &str = "Unknown error occurred";
const REDACTED: &str = "[REDACTED]";

/// Self-describing result of a delete across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::NotFound => "not_found",
        }
    }
}

impl From<bool> for DeleteOutcome {
    fn from(deleted: bool) -> Self {
        if deleted {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        }
    }
}

/// Envelope returned for every key channel.
///
/// `data` distinguishes "not sent" (save) from an explicit `null` (get on an
/// absent key), so it is a double option on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub success: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub data: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiKeyResponse {
    pub fn ok() -> Self {
        ApiKeyResponse {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn with_data(data: Option<String>) -> Self {
        ApiKeyResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        ApiKeyResponse {
            success: false,
            data: None,
            error: Some(if message.trim().is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            }),
        }
    }
}

/// A request arriving on one of the key channels.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel")]
pub enum IpcRequest {
    #[serde(rename = "key:save", rename_all = "camelCase")]
    KeySave { service: String, api_key: String },
    #[serde(rename = "key:get")]
    KeyGet { service: String },
    #[serde(rename = "key:delete")]
    KeyDelete { service: String },
}

impl IpcRequest {
    pub fn channel(&self) -> &'static str {
        match self {
            IpcRequest::KeySave { .. } => KEY_SAVE,
            IpcRequest::KeyGet { .. } => KEY_GET,
            IpcRequest::KeyDelete { .. } => KEY_DELETE,
        }
    }
}

impl fmt::Debug for IpcRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcRequest::KeySave { service, .. } => f
                .debug_struct("KeySave")
                .field("service", service)
                .field("api_key", &REDACTED)
                .finish(),
            IpcRequest::KeyGet { service } => {
                f.debug_struct("KeyGet").field("service", service).finish()
            }
            IpcRequest::KeyDelete { service } => {
                f.debug_struct("KeyDelete").field("service", service).finish()
            }
        }
    }
}

/// Routes a request to its handler.
pub async fn dispatch(
    credentials: &dyn CredentialServiceTrait,
    request: IpcRequest,
) -> ApiKeyResponse {
    match request {
        IpcRequest::KeySave { service, api_key } => {
            handle_save(credentials, &service, &api_key).await
        }
        IpcRequest::KeyGet { service } => handle_get(credentials, &service).await,
        IpcRequest::KeyDelete { service } => handle_delete(credentials, &service).await,
    }
}

pub async fn handle_save(
    credentials: &dyn CredentialServiceTrait,
    service: &str,
    api_key: &str,
) -> ApiKeyResponse {
    match credentials.save_secret(service, api_key).await {
        Ok(()) => ApiKeyResponse::ok(),
        Err(err) => failure(KEY_SAVE, service, err, Some(api_key)),
    }
}

pub async fn handle_get(credentials: &dyn CredentialServiceTrait, service: &str) -> ApiKeyResponse {
    match credentials.get_secret(service).await {
        Ok(api_key) => ApiKeyResponse::with_data(api_key),
        Err(err) => failure(KEY_GET, service, err, None),
    }
}

pub async fn handle_delete(
    credentials: &dyn CredentialServiceTrait,
    service: &str,
) -> ApiKeyResponse {
    match credentials.delete_secret(service).await {
        Ok(deleted) => {
            ApiKeyResponse::with_data(Some(DeleteOutcome::from(deleted).as_str().to_string()))
        }
        Err(err) => failure(KEY_DELETE, service, err, None),
    }
}

fn failure(channel: &str, service: &str, err: Error, secret: Option<&str>) -> ApiKeyResponse {
    let message = scrub_secret(err.to_string(), secret);
    error!("{} failed for service '{}': {}", channel, service, message);
    ApiKeyResponse::failure(message)
}

/// Removes every occurrence of `secret` from `message`.
pub fn scrub_secret(message: String, secret: Option<&str>) -> String {
    match secret {
        Some(secret) if !secret.is_empty() && message.contains(secret) => {
            message.replace(secret, REDACTED)
        }
        _ => message,
    }
}
