/*!
 * 主题系统模块
 *
 * 统一管理主题相关的所有功能，包括主题目录、状态仓库、命令接口和类型定义。
 */

pub mod catalog;
pub mod commands;
pub mod store;
pub mod types;

// 重新导出核心类型和函数
pub use catalog::DEFAULT_THEME;
pub use commands::{CurrentTheme, ThemeCommands, ThemeInfo};
pub use store::{
    ChangeSource, RestoreOutcome, SubscriptionId, ThemeEvent, ThemeListener, ThemeSnapshot,
    ThemeStore, THEME_STORAGE_KEY,
};
pub use types::{StatusBarStyle, ThemeColors, ThemeDefinition, ThemeId, UnknownTheme};
