//! 翻译编排与生词本业务逻辑
//!
//! 请求处理的核心流程在这里：校验输入、规范化、查库短路、
//! 调用外部提供方、落库。Web 层处理器只做参数提取与错误转换。

use std::sync::Arc;

use bson::oid::ObjectId;

use crate::error::{WordbookError, WordbookResult};
use crate::provider::Translator;
use crate::store::WordStore;
use crate::word::{normalize_word, Word};

/// 部署时选择的翻译端点行为
///
/// 两种流程是同一端点互斥的两种实现，按配置二选一，不会混在一个处理器里。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateMode {
    /// 单译文：命中即回，未命中翻译后立即落库
    Single,
    /// 多候选：返回候选列表，持久化推迟到调用方确认
    Options,
}

/// 生词本业务服务
///
/// 存储与翻译提供方句柄在进程启动时构造并显式注入，
/// 处理器之间不共享任何模块级单例状态。
#[derive(Clone)]
pub struct WordService {
    store: Arc<dyn WordStore>,
    translator: Arc<dyn Translator>,
}

impl WordService {
    pub fn new(store: Arc<dyn WordStore>, translator: Arc<dyn Translator>) -> Self {
        Self { store, translator }
    }

    /// 校验必填的词字段，缺失或全空白直接拒绝
    fn require_word(raw: &str) -> WordbookResult<()> {
        if raw.trim().is_empty() {
            return Err(WordbookError::InvalidInput(
                "word must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// 单译文流程
    ///
    /// 已入库的词直接返回存储的译文，不再调用外部提供方；
    /// 未命中时用规范化后的词请求一条译文并立即落库。
    pub async fn translate_single(&self, raw_word: &str) -> WordbookResult<String> {
        Self::require_word(raw_word)?;
        let normalized = normalize_word(raw_word);

        if let Some(existing) = self.store.find_by_word(&normalized).await? {
            tracing::info!("词条 {} 命中存储，跳过外部翻译", normalized);
            return Ok(existing.translation);
        }

        let translation = self.translator.translate_single(&normalized).await?;

        // 并发请求同一个新词时唯一索引只允许一条写入成功。
        // 落败的一侧仍把本次取得的译文返回给调用方，两个调用方
        // 看到的译文可能不同，但只有一条被持久化。
        match self
            .store
            .insert(Word::new(normalized.clone(), translation.clone(), None))
            .await
        {
            Ok(_) => {}
            Err(WordbookError::DuplicateKey(_)) => {
                tracing::warn!("词条 {} 已被并发请求写入，返回本次取得的译文", normalized);
            }
            Err(e) => return Err(e),
        }

        Ok(translation)
    }

    /// 多候选流程
    ///
    /// 已入库的词短路为单元素候选列表；未命中时把原始大小写的词
    /// 交给提供方取候选，这一步不持久化任何内容。
    pub async fn translate_options(&self, raw_word: &str) -> WordbookResult<Vec<String>> {
        Self::require_word(raw_word)?;
        let normalized = normalize_word(raw_word);

        if let Some(existing) = self.store.find_by_word(&normalized).await? {
            tracing::info!("词条 {} 命中存储，返回已保存译文", normalized);
            return Ok(vec![existing.translation]);
        }

        // 提示词保留原始大小写，落库键仍然是规范化形式
        self.translator.translate_options(raw_word.trim()).await
    }

    /// 保存调用方确认的译文
    ///
    /// 译文不要求来自之前返回的候选列表，任何非空文本都接受。
    /// 唯一键冲突在这里没有补偿行为，原样向上传播。
    pub async fn save_translation(
        &self,
        raw_word: &str,
        translation: &str,
    ) -> WordbookResult<Word> {
        Self::require_word(raw_word)?;

        let translation = translation.trim();
        if translation.is_empty() {
            return Err(WordbookError::InvalidInput(
                "translation must not be empty".to_string(),
            ));
        }

        self.store
            .insert(Word::new(normalize_word(raw_word), translation, None))
            .await
    }

    /// 创建词条（裸 CRUD 面）
    ///
    /// 这里刻意不做规范化，键以调用方给出的原样写入，
    /// "Cat" 与 "cat" 会被当作两个不同的键。
    pub async fn create_word(
        &self,
        word: &str,
        translation: &str,
        user: Option<String>,
    ) -> WordbookResult<Word> {
        if word.is_empty() {
            return Err(WordbookError::InvalidInput(
                "word must not be empty".to_string(),
            ));
        }

        self.store.insert(Word::new(word, translation, user)).await
    }

    /// 列出全部词条
    pub async fn list_words(&self) -> WordbookResult<Vec<Word>> {
        self.store.list_all().await
    }

    /// 按 id 删除词条并返回被删记录
    pub async fn delete_word(&self, id: ObjectId) -> WordbookResult<Word> {
        self.store
            .delete_by_id(id)
            .await?
            .ok_or(WordbookError::NotFound)
    }
}
