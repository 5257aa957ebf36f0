/*!
 * 配置系统数据类型定义
 *
 * 结构与 TOML 配置文件格式保持一致，缺失的字段使用默认值。
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// 默认日志级别，`RUST_LOG` 优先
    pub log_level: String,

    /// 存储配置 (对应 TOML 中的 [storage])
    pub storage: StorageConfig,
}

/// 存储配置 (对应 TOML 中的 [storage] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// 存储后端
    pub backend: StorageBackend,

    /// 自定义数据目录，未设置时使用平台数据目录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// 偏好文件名
    pub file_name: String,
}

/// 存储后端
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 仅保存在内存中，不跨启动保留
    Memory,
    /// JSON 文件
    File,
}

impl Default for AppConfig {
    fn default() -> Self {
        super::defaults::create_default_config()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        super::defaults::create_default_storage_config()
    }
}
