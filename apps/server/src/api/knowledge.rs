use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use odinview_core::knowledge::{KnowledgeItem, NewKnowledgeItem};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn list_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<KnowledgeItem>>> {
    let items = state.knowledge_service.list_items()?;
    Ok(Json(items))
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewKnowledgeItem>,
) -> ApiResult<Json<KnowledgeItem>> {
    let created = state.knowledge_service.create_item(payload).await?;
    Ok(Json(created))
}

async fn get_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<KnowledgeItem>> {
    state
        .knowledge_service
        .get_item(&id)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.knowledge_service.delete_item(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/knowledge", get(list_items).post(create_item))
        .route("/knowledge/{id}", get(get_item).delete(delete_item))
}
