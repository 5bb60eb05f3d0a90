//! 生词本 CRUD 集成测试
//!
//! 覆盖裸创建端点的"不做规范化"语义、列出与删除行为，
//! 以及唯一约束下的并发插入。

mod common;

use bson::oid::ObjectId;
use common::test_service;
use wordbook::word::Word;
use wordbook::WordbookError;

/// 裸创建端点不做规范化，"Cat" 与 "cat" 是两个不同的键
#[tokio::test]
async fn test_create_does_not_normalize() {
    let (service, store, _translator) = test_service("", &[]);

    service.create_word("Cat", "кот", None).await.unwrap();
    service.create_word("cat", "кошка", None).await.unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.stored_translation("Cat").as_deref(), Some("кот"));
    assert_eq!(store.stored_translation("cat").as_deref(), Some("кошка"));
}

/// 创建返回带存储分配 id 的记录，user 标签原样保存
#[tokio::test]
async fn test_create_assigns_id_and_keeps_user_label() {
    let (service, _store, _translator) = test_service("", &[]);

    let created = service
        .create_word("дом", "house", Some("alice".to_string()))
        .await
        .unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.word, "дом");
    assert_eq!(created.user.as_deref(), Some("alice"));
}

/// 空词的创建请求被显式拒绝
#[tokio::test]
async fn test_create_rejects_empty_word() {
    let (service, store, _translator) = test_service("", &[]);

    assert!(matches!(
        service.create_word("", "перевод", None).await,
        Err(WordbookError::InvalidInput(_))
    ));
    assert_eq!(store.len(), 0);
}

/// 删除有效 id 后列出结果不再包含该记录
#[tokio::test]
async fn test_delete_removes_record_from_listing() {
    let (service, _store, _translator) = test_service("", &[]);

    let kept = service.create_word("hello", "привет", None).await.unwrap();
    let doomed = service.create_word("world", "мир", None).await.unwrap();

    let deleted = service.delete_word(doomed.id.unwrap()).await.unwrap();
    assert_eq!(deleted.word, "world");
    assert_eq!(deleted.translation, "мир");

    let remaining = service.list_words().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

/// 删除未知 id 返回 NotFound，集合保持不变
#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let (service, store, _translator) = test_service("", &[]);

    service.create_word("hello", "привет", None).await.unwrap();

    let result = service.delete_word(ObjectId::new()).await;
    assert!(matches!(result, Err(WordbookError::NotFound)));
    assert_eq!(store.len(), 1);
}

/// 并发插入同一个词：恰好一条写入成功，另一条以 DuplicateKey 失败
#[tokio::test]
async fn test_concurrent_inserts_of_same_word() {
    use wordbook::store::WordStore;

    let (_service, store, _translator) = test_service("", &[]);

    let (first, second) = tokio::join!(
        store.insert(Word::new("hello", "привет", None)),
        store.insert(Word::new("hello", "здравствуй", None)),
    );

    let succeeded = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(succeeded, 1, "唯一约束只允许一条写入成功");

    let failed = [first, second].into_iter().find(|r| r.is_err()).unwrap();
    assert!(matches!(failed, Err(WordbookError::DuplicateKey(_))));

    assert_eq!(store.len(), 1);
}
