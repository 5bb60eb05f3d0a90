// 集成测试公共模块
//
// 提供内存存储与脚本化翻译提供方，用于在不依赖数据库和网络的情况下
// 驱动完整的编排流程。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bson::oid::ObjectId;

use wordbook::error::{WordbookError, WordbookResult};
use wordbook::provider::Translator;
use wordbook::store::WordStore;
use wordbook::word::Word;
use wordbook::WordService;

/// 内存词条存储，插入时模拟唯一索引约束
pub struct MemoryWordStore {
    words: Mutex<Vec<Word>>,
    hide_from_find: AtomicBool,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self {
            words: Mutex::new(Vec::new()),
            hide_from_find: AtomicBool::new(false),
        }
    }

    /// 让 find_by_word 始终返回未命中，用来模拟
    /// "查找未命中但插入时撞上唯一索引" 的并发竞争窗口
    pub fn hide_from_find(&self) {
        self.hide_from_find.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.words.lock().unwrap().len()
    }

    pub fn stored_translation(&self, word: &str) -> Option<String> {
        self.words
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.translation.clone())
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn find_by_word(&self, normalized: &str) -> WordbookResult<Option<Word>> {
        if self.hide_from_find.load(Ordering::SeqCst) {
            return Ok(None);
        }

        Ok(self
            .words
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.word == normalized)
            .cloned())
    }

    async fn insert(&self, mut word: Word) -> WordbookResult<Word> {
        let mut words = self.words.lock().unwrap();

        if words.iter().any(|entry| entry.word == word.word) {
            return Err(WordbookError::DuplicateKey(word.word));
        }

        word.id = Some(ObjectId::new());
        words.push(word.clone());
        Ok(word)
    }

    async fn list_all(&self) -> WordbookResult<Vec<Word>> {
        Ok(self.words.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: ObjectId) -> WordbookResult<Option<Word>> {
        let mut words = self.words.lock().unwrap();
        let position = words.iter().position(|entry| entry.id == Some(id));
        Ok(position.map(|index| words.remove(index)))
    }
}

/// 脚本化翻译提供方，记录调用次数与收到的词
pub struct ScriptedTranslator {
    single_response: String,
    options_response: Vec<String>,
    single_calls: AtomicUsize,
    options_calls: AtomicUsize,
    last_word: Mutex<Option<String>>,
}

impl ScriptedTranslator {
    pub fn new(single_response: &str, options_response: &[&str]) -> Self {
        Self {
            single_response: single_response.to_string(),
            options_response: options_response.iter().map(|s| s.to_string()).collect(),
            single_calls: AtomicUsize::new(0),
            options_calls: AtomicUsize::new(0),
            last_word: Mutex::new(None),
        }
    }

    pub fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }

    pub fn options_calls(&self) -> usize {
        self.options_calls.load(Ordering::SeqCst)
    }

    pub fn last_word(&self) -> Option<String> {
        self.last_word.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate_single(&self, word: &str) -> WordbookResult<String> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_word.lock().unwrap() = Some(word.to_string());
        Ok(self.single_response.clone())
    }

    async fn translate_options(&self, word: &str) -> WordbookResult<Vec<String>> {
        self.options_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_word.lock().unwrap() = Some(word.to_string());
        Ok(self.options_response.clone())
    }
}

/// 组装一套完整的测试环境
pub fn test_service(
    single_response: &str,
    options_response: &[&str],
) -> (WordService, Arc<MemoryWordStore>, Arc<ScriptedTranslator>) {
    let store = Arc::new(MemoryWordStore::new());
    let translator = Arc::new(ScriptedTranslator::new(single_response, options_response));

    let service = WordService::new(store.clone(), translator.clone());
    (service, store, translator)
}
