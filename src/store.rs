//! 词条持久化层
//!
//! 单一集合的精确查找、插入、全量列出与按 id 删除。
//! `word` 字段的唯一索引是并发写入时唯一的去重保障。

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::error::{WordbookError, WordbookResult};
use crate::word::Word;

/// 词条存储接口
///
/// 处理器不直接持有数据库连接，存储句柄在进程启动时构造并显式注入。
#[async_trait]
pub trait WordStore: Send + Sync {
    /// 按规范化后的词精确查找
    ///
    /// 调用方负责传入与写入路径相同规则规范化后的词。
    async fn find_by_word(&self, normalized: &str) -> WordbookResult<Option<Word>>;

    /// 插入一条词条，返回带存储分配 id 的记录
    ///
    /// 违反唯一约束时返回 `DuplicateKey`。
    async fn insert(&self, word: Word) -> WordbookResult<Word>;

    /// 列出全部词条，按插入顺序返回
    async fn list_all(&self) -> WordbookResult<Vec<Word>>;

    /// 按 id 删除并返回被删记录；目标不存在时返回 None
    async fn delete_by_id(&self, id: ObjectId) -> WordbookResult<Option<Word>>;
}

/// 基于 MongoDB 的词条存储
pub struct MongoWordStore {
    collection: Collection<Word>,
}

impl MongoWordStore {
    /// 包装一个已连接的词条集合
    pub fn new(collection: Collection<Word>) -> Self {
        Self { collection }
    }

    /// 创建 `word` 字段的唯一索引
    ///
    /// 必须在接受请求前完成，否则并发插入同词时两条都会写入成功。
    pub async fn ensure_indexes(&self) -> WordbookResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "word": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| WordbookError::Database(format!("创建唯一索引失败: {}", e)))?;

        Ok(())
    }
}

/// 判断 MongoDB 错误是否为唯一键冲突（错误码 11000）
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        ErrorKind::Command(ref command_error) => command_error.code == 11000,
        _ => false,
    }
}

#[async_trait]
impl WordStore for MongoWordStore {
    async fn find_by_word(&self, normalized: &str) -> WordbookResult<Option<Word>> {
        self.collection
            .find_one(doc! { "word": normalized })
            .await
            .map_err(|e| WordbookError::Database(format!("查询词条失败: {}", e)))
    }

    async fn insert(&self, mut word: Word) -> WordbookResult<Word> {
        let result = self.collection.insert_one(&word).await.map_err(|e| {
            if is_duplicate_key(&e) {
                WordbookError::DuplicateKey(word.word.clone())
            } else {
                WordbookError::Database(format!("插入词条失败: {}", e))
            }
        })?;

        word.id = result.inserted_id.as_object_id();
        Ok(word)
    }

    async fn list_all(&self) -> WordbookResult<Vec<Word>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| WordbookError::Database(format!("查询词条列表失败: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| WordbookError::Database(format!("读取词条列表失败: {}", e)))
    }

    async fn delete_by_id(&self, id: ObjectId) -> WordbookResult<Option<Word>> {
        self.collection
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(|e| WordbookError::Database(format!("删除词条失败: {}", e)))
    }
}
