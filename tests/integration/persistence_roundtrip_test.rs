/*!
 * 主题持久化集成测试
 *
 * 模拟多次启动：上一次会话的选择在下一次启动时被恢复。
 */

#[path = "../test_utils/mock_storage.rs"]
mod mock_storage;

use std::sync::Arc;
use tempfile::TempDir;

use mock_storage::FailingStore;
use theme_sample_lib::config::{AppConfig, AppPaths, StorageBackend};
use theme_sample_lib::storage::{JsonFileStore, KeyValueStore, MemoryKeyValueStore};
use theme_sample_lib::theme::{catalog, ThemeId, ThemeSnapshot, ThemeStore, THEME_STORAGE_KEY};
use theme_sample_lib::AppContext;

#[tokio::test]
async fn test_roundtrip_every_theme_in_memory() {
    for id in ThemeId::ALL {
        let storage = MemoryKeyValueStore::new();

        let first_session = ThemeStore::new(Arc::new(storage.clone()));
        first_session.select_theme(id).await.expect("保存任务失败");
        drop(first_session);

        let second_session = ThemeStore::new(Arc::new(storage.clone()));
        second_session.restore_theme().await;
        assert_eq!(second_session.snapshot(), ThemeSnapshot::of(id));
        assert_eq!(second_session.current_theme_data(), catalog::lookup(id));
    }
}

#[tokio::test]
async fn test_roundtrip_through_preferences_file() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let paths = AppPaths::with_app_data_dir(temp_dir.path());

    {
        let context = AppContext::initialize(AppConfig::default(), paths.clone()).await;
        assert_eq!(context.store.current_theme(), ThemeId::Light);
        assert!(context.commands.set_theme("orange").await);
    }

    let context = AppContext::initialize(AppConfig::default(), paths).await;
    assert_eq!(context.store.current_theme(), ThemeId::Orange);

    let current: Vec<ThemeId> = context
        .commands
        .get_available_themes()
        .into_iter()
        .filter(|theme| theme.is_current)
        .map(|theme| theme.id)
        .collect();
    assert_eq!(current, vec![ThemeId::Orange]);
}

#[tokio::test]
async fn test_stale_value_in_file_falls_back_to_default() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let paths = AppPaths::with_app_data_dir(temp_dir.path());

    let store = JsonFileStore::new(paths.preferences_file("preferences.json"));
    store
        .set(THEME_STORAGE_KEY, "purple")
        .await
        .expect("写入失败");

    let context = AppContext::initialize(AppConfig::default(), paths).await;
    assert_eq!(context.store.current_theme(), ThemeId::Light);
}

#[tokio::test]
async fn test_corrupted_file_falls_back_and_recovers() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let paths = AppPaths::with_app_data_dir(temp_dir.path());
    std::fs::write(paths.preferences_file("preferences.json"), "not json").unwrap();

    let context = AppContext::initialize(AppConfig::default(), paths.clone()).await;
    assert_eq!(context.store.current_theme(), ThemeId::Light);

    // 下一次选择会覆盖损坏的文件
    context
        .store
        .select_theme(ThemeId::Dark)
        .await
        .expect("保存任务失败");
    drop(context);

    let context = AppContext::initialize(AppConfig::default(), paths).await;
    assert_eq!(context.store.current_theme(), ThemeId::Dark);
}

#[tokio::test]
async fn test_memory_backend_does_not_touch_disk() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let paths = AppPaths::with_app_data_dir(temp_dir.path());
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;

    let context = AppContext::initialize(config, paths).await;
    context
        .store
        .select_theme(ThemeId::Blue)
        .await
        .expect("保存任务失败");

    assert!(!temp_dir.path().join("preferences.json").exists());
}

#[tokio::test]
async fn test_unavailable_storage_never_blocks_startup() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let paths = AppPaths::with_app_data_dir(temp_dir.path());
    let storage = Arc::new(FailingStore {
        fail_get: true,
        fail_set: true,
        ..FailingStore::default()
    });

    let context = AppContext::with_storage(AppConfig::default(), paths, storage.clone()).await;
    assert_eq!(context.store.current_theme(), ThemeId::Light);

    assert!(context.commands.set_theme("white").await);
    assert_eq!(context.store.current_theme(), ThemeId::White);
    assert_eq!(storage.set_calls(), 1);
}
