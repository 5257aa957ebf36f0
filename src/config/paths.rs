/*!
 * 应用路径管理模块
 *
 * 解析应用数据目录以及其中的配置文件、偏好文件路径。
 */

use crate::config::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::utils::error::AppResult;
use anyhow::anyhow;
use std::path::{Path, PathBuf};

/// 应用路径
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// 应用程序数据目录
    app_data_dir: PathBuf,
}

impl AppPaths {
    /// 使用平台数据目录创建路径管理器
    ///
    /// - Windows: `%APPDATA%\theme-sample`
    /// - macOS: `~/Library/Application Support/theme-sample`
    /// - Linux: `~/.local/share/theme-sample`
    pub fn new() -> AppResult<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("无法获取数据目录"))?;
        Ok(Self::with_app_data_dir(data_dir.join(APP_DIR_NAME)))
    }

    /// 使用自定义应用数据目录
    pub fn with_app_data_dir<P: AsRef<Path>>(app_data_dir: P) -> Self {
        Self {
            app_data_dir: app_data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }

    /// 配置文件路径
    pub fn config_file(&self) -> PathBuf {
        self.app_data_dir.join(CONFIG_FILE_NAME)
    }

    /// 偏好文件路径
    pub fn preferences_file(&self, file_name: &str) -> PathBuf {
        self.app_data_dir.join(file_name)
    }
}
