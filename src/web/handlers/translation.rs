//! 翻译相关 API 处理器

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
};

use super::error_response;
use crate::service::TranslateMode;
use crate::web::types::{
    AppState, SaveTranslationRequest, SaveTranslationResponse, TranslateRequest, TranslateResponse,
};

/// 翻译端点，按部署模式分派到单译文或多候选流程
pub async fn translate_word(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let word = request.word.unwrap_or_default();

    let response = match state.translate_mode {
        TranslateMode::Single => state
            .service
            .translate_single(&word)
            .await
            .map(|translation| TranslateResponse::Single { translation }),
        TranslateMode::Options => state
            .service
            .translate_options(&word)
            .await
            .map(|options| TranslateResponse::Options { options }),
    }
    .map_err(error_response)?;

    Ok(Json(response))
}

/// 保存调用方选定的译文
pub async fn save_translation(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<SaveTranslationRequest>,
) -> Result<(StatusCode, Json<SaveTranslationResponse>), (StatusCode, Json<serde_json::Value>)> {
    let word = request.word.unwrap_or_default();
    let translation = request.translation.unwrap_or_default();

    state
        .service
        .save_translation(&word, &translation)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(SaveTranslationResponse {
            message: "Word saved successfully".to_string(),
        }),
    ))
}
