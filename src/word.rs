//! 词条数据模型与规范化规则

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 持久化的词条记录
///
/// `word` 字段在集合上有唯一索引，同一个规范化后的词最多只存在一条记录。
/// 记录创建后不可修改，只能被删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// 存储分配的记录标识，插入前为 None
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 词本身，编排路径写入前先规范化
    pub word: String,
    /// 译文，自由文本
    pub translation: String,
    /// 可选的用户标签，仅作展示，不参与任何访问控制
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Word {
    /// 创建一条尚未落库的词条
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        user: Option<String>,
    ) -> Self {
        Self {
            id: None,
            word: word.into(),
            translation: translation.into(),
            user,
        }
    }
}

/// 查询与存储共用的规范化规则：去除首尾空白并转为小写
///
/// 读写两侧必须使用同一个规则，等值比较才可靠。
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}
