/*!
 * 配置加载
 *
 * 从 TOML 文件读取配置，文件不存在时使用默认配置。
 */

use crate::config::types::AppConfig;
use crate::utils::error::AppResult;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

impl AppConfig {
    /// 从指定路径加载配置
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("配置文件不存在，使用默认配置: {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("配置文件解析失败: {}", path.display()))?;

        info!("配置已加载: {}", path.display());
        Ok(config)
    }

    /// 解析 TOML 配置内容
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config = toml::from_str::<AppConfig>(content).context("TOML格式错误")?;
        Ok(config)
    }
}
