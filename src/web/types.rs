//! Web 模块的数据类型定义

use serde::{Deserialize, Serialize};

use crate::service::{TranslateMode, WordService};
use crate::word::Word;

/// 应用状态
///
/// 业务服务句柄与部署模式在进程启动时构造一次，随后在处理器间共享。
#[derive(Clone)]
pub struct AppState {
    pub service: WordService,
    pub translate_mode: TranslateMode,
}

/// 翻译请求
///
/// `word` 建模为 Option：字段缺失也要走显式校验给出 400，
/// 而不是让反序列化层直接拒绝。
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub word: Option<String>,
}

/// 翻译响应，两种部署变体各自的负载形状
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TranslateResponse {
    /// 单译文变体
    Single { translation: String },
    /// 多候选变体
    Options { options: Vec<String> },
}

/// 保存选定译文的请求
#[derive(Debug, Deserialize)]
pub struct SaveTranslationRequest {
    pub word: Option<String>,
    pub translation: Option<String>,
}

/// 保存结果
#[derive(Debug, Serialize)]
pub struct SaveTranslationResponse {
    pub message: String,
}

/// 创建词条请求（裸 CRUD 面，不做规范化）
#[derive(Debug, Deserialize)]
pub struct CreateWordRequest {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub user: Option<String>,
}

/// 对外返回的词条记录，id 序列化为十六进制字符串
#[derive(Debug, Serialize)]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl From<Word> for WordRecord {
    fn from(word: Word) -> Self {
        Self {
            id: word.id.map(|id| id.to_hex()).unwrap_or_default(),
            word: word.word,
            translation: word.translation,
            user: word.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_response_single_shape() {
        let response = TranslateResponse::Single {
            translation: "привет".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, serde_json::json!({ "translation": "привет" }));
    }

    #[test]
    fn translate_response_options_shape() {
        let response = TranslateResponse::Options {
            options: vec!["кот".to_string(), "кошка".to_string()],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, serde_json::json!({ "options": ["кот", "кошка"] }));
    }

    #[test]
    fn translate_request_tolerates_missing_word() {
        let request: TranslateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.word.is_none());
    }

    #[test]
    fn word_record_exposes_hex_id() {
        let mut word = Word::new("hello", "привет", Some("alice".to_string()));
        let id = bson::oid::ObjectId::new();
        word.id = Some(id);

        let record = WordRecord::from(word);
        assert_eq!(record.id, id.to_hex());
        assert_eq!(record.user.as_deref(), Some("alice"));
    }
}
