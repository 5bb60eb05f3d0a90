//! # Wordbook
//!
//! 词汇翻译 Web 服务：客户端提交一个单词，后端向外部文本生成 API
//! 请求译文候选，与已持久化的生词本去重，并允许调用方确认后保存。
//!
//! ## 模块组织
//!
//! - `word` - 词条数据模型与规范化规则
//! - `store` - 词条持久化层（MongoDB）
//! - `provider` - 外部翻译提供方
//! - `service` - 翻译编排与生词本业务逻辑
//! - `web` - Web 服务器功能
//! - `env` - 环境变量管理
//! - `error` - 统一错误类型

pub mod env;
pub mod error;
pub mod provider;
pub mod service;
pub mod store;
pub mod web;
pub mod word;

pub use error::{WordbookError, WordbookResult};
pub use service::{TranslateMode, WordService};
pub use word::{normalize_word, Word};
