//! 应用程序初始化

pub mod error;

pub use error::{SetupError, SetupResult};

use crate::config::{AppConfig, AppPaths, StorageBackend, StorageConfig};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryKeyValueStore};
use crate::theme::{RestoreOutcome, ThemeCommands, ThemeStore};

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

/// 初始化日志系统
///
/// `RUST_LOG` 优先，未设置时使用配置中的日志级别。
pub fn init_logging(default_level: &str) -> SetupResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| SetupError::Logging(e.to_string()))
}

/// 加载配置，读取失败时回退到默认配置
pub fn load_config(paths: &AppPaths) -> AppConfig {
    let config_path = paths.config_file();
    match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("配置加载失败，使用默认配置: {:#}", e);
            AppConfig::default()
        }
    }
}

/// 根据存储配置创建持久化存储
pub fn create_storage(config: &StorageConfig, paths: &AppPaths) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => {
            info!("使用内存存储，主题选择不会跨启动保留");
            Arc::new(MemoryKeyValueStore::new())
        }
        StorageBackend::File => {
            let path = match &config.data_dir {
                Some(dir) => dir.join(&config.file_name),
                None => paths.preferences_file(&config.file_name),
            };
            info!("使用文件存储: {}", path.display());
            Arc::new(JsonFileStore::new(path))
        }
    }
}

/// 应用上下文
///
/// 组合根：持有配置、主题仓库和命令接口，界面层只通过这里拿到仓库句柄。
pub struct AppContext {
    pub config: AppConfig,
    pub paths: AppPaths,
    pub store: Arc<ThemeStore>,
    pub commands: ThemeCommands,
}

impl AppContext {
    /// 创建主题仓库并恢复上次选择的主题
    pub async fn initialize(config: AppConfig, paths: AppPaths) -> Self {
        let storage = create_storage(&config.storage, &paths);
        Self::with_storage(config, paths, storage).await
    }

    /// 使用指定存储初始化
    pub async fn with_storage(
        config: AppConfig,
        paths: AppPaths,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let store = Arc::new(ThemeStore::new(storage));

        match store.restore_theme().await {
            RestoreOutcome::Restored(id) => info!("启动主题: {}", id),
            outcome => info!("启动主题: {} ({:?})", store.current_theme(), outcome),
        }

        let commands = ThemeCommands::new(Arc::clone(&store));
        Self {
            config,
            paths,
            store,
            commands,
        }
    }
}
