/*!
 * 配置系统默认值
 */

use crate::config::types::*;
use crate::storage::PREFERENCES_FILE_NAME;

/// 创建默认配置
pub fn create_default_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        storage: create_default_storage_config(),
    }
}

/// 创建默认存储配置
pub fn create_default_storage_config() -> StorageConfig {
    StorageConfig {
        backend: StorageBackend::File,
        data_dir: None,
        file_name: PREFERENCES_FILE_NAME.to_string(),
    }
}
