use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use odinview_ai::{ChatMessage, ChatRequest};

use crate::{error::ApiResult, main_lib::AppState};

async fn send_prompt(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatMessage>> {
    let reply = state.chat_service.send_prompt(request.messages).await?;
    Ok(Json(reply))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(send_prompt))
}
