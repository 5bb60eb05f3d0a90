//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{delete, post},
    Router,
};

use crate::web::handlers::{create_word, delete_word, list_words, save_translation, translate_word};
use crate::web::types::AppState;

/// 创建 API 路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 翻译端点：单译文或多候选，按部署模式二选一
        .route("/api/translate", post(translate_word))
        .route("/api/save-translation", post(save_translation))
        // 生词本 CRUD
        .route("/api/words", post(create_word).get(list_words))
        .route("/api/words/:id", delete(delete_word))
}
