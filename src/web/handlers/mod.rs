//! Web 路由处理器

pub mod translation;
pub mod words;

pub use translation::*;
pub use words::*;

use axum::http::StatusCode;
use axum::response::Json;

use crate::error::WordbookError;

/// 把业务错误转换为 HTTP 状态码与 JSON 错误体
///
/// 客户端输入问题记 info，其余失败记 error；上游细节只进日志。
pub(crate) fn error_response(error: WordbookError) -> (StatusCode, Json<serde_json::Value>) {
    match &error {
        WordbookError::InvalidInput(_) | WordbookError::NotFound => {
            tracing::info!("请求被拒绝: {}", error);
        }
        _ => {
            tracing::error!("请求处理失败: {}", error);
        }
    }

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": true,
            "message": error.public_message(),
        })),
    )
}
