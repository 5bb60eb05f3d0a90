//! 服务统一错误处理
//!
//! 所有失败都在请求处理器边界被转换为 HTTP 状态码加 JSON 错误体，
//! 不会向上传播导致进程崩溃。

use axum::http::StatusCode;
use thiserror::Error;

/// 服务错误类型
#[derive(Error, Debug)]
pub enum WordbookError {
    /// 缺失或为空的必填字段
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 外部翻译调用失败或响应不可解析，细节只进日志
    #[error("翻译提供方调用失败: {0}")]
    Provider(String),

    /// 唯一约束冲突，同一个规范化的词已存在
    #[error("词条已存在: {0}")]
    DuplicateKey(String),

    /// 删除目标不存在
    #[error("记录不存在")]
    NotFound,

    /// 存储层错误
    #[error("数据库错误: {0}")]
    Database(String),

    /// 服务器启动或运行错误
    #[error("服务器错误: {0}")]
    Server(String),
}

impl WordbookError {
    /// 错误对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            WordbookError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WordbookError::NotFound => StatusCode::NOT_FOUND,
            WordbookError::Provider(_)
            | WordbookError::DuplicateKey(_)
            | WordbookError::Database(_)
            | WordbookError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回给客户端的消息
    ///
    /// 上游细节（提供方响应、数据库错误）只写日志，对外保持通用描述。
    pub fn public_message(&self) -> String {
        match self {
            WordbookError::InvalidInput(message) => message.clone(),
            WordbookError::Provider(_) => "Unable to translate word".to_string(),
            WordbookError::DuplicateKey(_) => "Unable to save word".to_string(),
            WordbookError::NotFound => "Word not found".to_string(),
            WordbookError::Database(_) | WordbookError::Server(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// 错误结果类型别名
pub type WordbookResult<T> = Result<T, WordbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            WordbookError::InvalidInput("word must not be empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(WordbookError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            WordbookError::Provider("upstream 503".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WordbookError::DuplicateKey("hello".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WordbookError::Database("connection reset".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn provider_detail_is_not_leaked_to_clients() {
        let error = WordbookError::Provider("401 Unauthorized: bad api key".into());
        assert_eq!(error.public_message(), "Unable to translate word");
        // 细节仍保留在 Display 输出里供日志使用
        assert!(error.to_string().contains("bad api key"));
    }

    #[test]
    fn invalid_input_message_is_shown_verbatim() {
        let error = WordbookError::InvalidInput("word must not be empty".into());
        assert_eq!(error.public_message(), "word must not be empty");
    }
}
