//! Key channel routes.
//!
//! Every handler answers `200 OK` with an [`ApiKeyResponse`]; failures travel
//! inside the envelope, never as HTTP errors.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use odinview_core::ipc::{self, ApiKeyResponse, IpcRequest};

use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveKeyBody {
    service: String,
    api_key: String,
}

/// Message returned for any body that fails to parse.
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

// serde's rejection text can quote the submitted api key; only the status
// leaves this function.
fn rejected_body(rejection: JsonRejection) -> ApiKeyResponse {
    tracing::debug!("Rejected key request body ({})", rejection.status());
    ApiKeyResponse::failure(INVALID_BODY_MESSAGE)
}

/// Single entry point mirroring the desktop shell's invoke channels.
async fn invoke(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IpcRequest>, JsonRejection>,
) -> Json<ApiKeyResponse> {
    match payload {
        Ok(Json(request)) => {
            tracing::debug!("IPC request on {}", request.channel());
            Json(ipc::dispatch(state.credential_service.as_ref(), request).await)
        }
        Err(rejection) => Json(rejected_body(rejection)),
    }
}

async fn save_key(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SaveKeyBody>, JsonRejection>,
) -> Json<ApiKeyResponse> {
    match payload {
        Ok(Json(body)) => Json(
            ipc::handle_save(state.credential_service.as_ref(), &body.service, &body.api_key)
                .await,
        ),
        Err(rejection) => Json(rejected_body(rejection)),
    }
}

async fn get_key(
    Path(service): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<ApiKeyResponse> {
    Json(ipc::handle_get(state.credential_service.as_ref(), &service).await)
}

async fn delete_key(
    Path(service): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<ApiKeyResponse> {
    Json(ipc::handle_delete(state.credential_service.as_ref(), &service).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ipc", post(invoke))
        .route("/keys", post(save_key))
        .route("/keys/{service}", get(get_key).delete(delete_key))
}
