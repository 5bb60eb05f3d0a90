//! 词条集合的 CRUD 处理器

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, Path, State},
    http::StatusCode,
    response::Json,
};
use bson::oid::ObjectId;

use super::error_response;
use crate::error::WordbookError;
use crate::web::types::{AppState, CreateWordRequest, WordRecord};

/// 创建词条
///
/// 这个端点不做任何规范化，键以请求给出的原样写入。
pub async fn create_word(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<CreateWordRequest>,
) -> Result<(StatusCode, Json<WordRecord>), (StatusCode, Json<serde_json::Value>)> {
    let word = request.word.unwrap_or_default();
    let translation = request.translation.unwrap_or_default();

    let created = state
        .service
        .create_word(&word, &translation, request.user)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(WordRecord::from(created))))
}

/// 列出全部词条
pub async fn list_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WordRecord>>, (StatusCode, Json<serde_json::Value>)> {
    let words = state.service.list_words().await.map_err(error_response)?;

    Ok(Json(words.into_iter().map(WordRecord::from).collect()))
}

/// 按 id 删除词条并返回被删记录
pub async fn delete_word(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WordRecord>, (StatusCode, Json<serde_json::Value>)> {
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| error_response(WordbookError::InvalidInput(format!("invalid word id '{}'", id))))?;

    let deleted = state
        .service
        .delete_word(object_id)
        .await
        .map_err(error_response)?;

    Ok(Json(WordRecord::from(deleted)))
}
