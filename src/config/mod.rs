/*!
 * 配置系统模块
 *
 * 提供基于 TOML 格式的应用配置、默认值和路径解析。
 */

pub mod defaults;
pub mod loader;
pub mod paths;
pub mod types;

// 重新导出核心类型和函数
pub use defaults::*;
pub use paths::AppPaths;
pub use types::*;

/// 应用数据目录名
pub const APP_DIR_NAME: &str = "theme-sample";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.toml";
