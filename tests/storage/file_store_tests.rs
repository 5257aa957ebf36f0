/*!
 * JSON 文件存储测试
 *
 * 验证偏好文件的读写、跨实例持久化和损坏文件处理。
 */

use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

use theme_sample_lib::storage::{JsonFileStore, KeyValueStore, StorageError};

/// 创建测试用的文件存储
fn create_test_store() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let store = JsonFileStore::new(temp_dir.path().join("preferences.json"));
    (store, temp_dir)
}

#[tokio::test]
async fn test_value_survives_new_instance() {
    let (store, temp_dir) = create_test_store();
    store.set("selectedTheme", "blue").await.expect("写入失败");
    drop(store);

    let reopened = JsonFileStore::new(temp_dir.path().join("preferences.json"));
    assert_eq!(
        reopened.get("selectedTheme").await.expect("读取失败").as_deref(),
        Some("blue")
    );
}

#[tokio::test]
async fn test_file_is_json_object() {
    let (store, _temp_dir) = create_test_store();
    store.set("selectedTheme", "dark").await.expect("写入失败");

    let content = fs::read_to_string(store.path()).await.expect("读取文件失败");
    let value: serde_json::Value = serde_json::from_str(&content).expect("JSON 解析失败");
    assert_eq!(value, serde_json::json!({ "selectedTheme": "dark" }));
}

#[tokio::test]
async fn test_non_string_values_are_corruption() {
    let (store, _temp_dir) = create_test_store();
    fs::write(store.path(), br#"{ "selectedTheme": 42 }"#)
        .await
        .expect("写入文件失败");

    match store.get("selectedTheme").await {
        Err(StorageError::Corrupted { path, .. }) => assert_eq!(path, store.path()),
        other => panic!("预期损坏错误，实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreadable_path_is_io_error() {
    let (store, temp_dir) = create_test_store();
    // 偏好文件路径被目录占用
    fs::create_dir_all(temp_dir.path().join("preferences.json"))
        .await
        .expect("创建目录失败");

    assert!(matches!(
        store.get("selectedTheme").await,
        Err(StorageError::Io { .. })
    ));
    assert!(store.set("selectedTheme", "dark").await.is_err());
}

#[tokio::test]
async fn test_concurrent_writes_keep_all_keys() {
    let (store, _temp_dir) = create_test_store();
    let store = Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .set(&format!("key_{}", i), &format!("value_{}", i))
                .await
        }));
    }
    for handle in handles {
        handle.await.expect("任务失败").expect("写入失败");
    }

    for i in 0..10 {
        assert_eq!(
            store.get(&format!("key_{}", i)).await.unwrap(),
            Some(format!("value_{}", i))
        );
    }
}
