//! Theme Sample 应用核心
//!
//! 演示用户可选的界面主题，主要功能包括：
//! - 内置主题目录
//! - 主题状态仓库与订阅通知
//! - 主题选择的持久化与启动恢复

// 模块声明
pub mod cli; // 命令行入口
pub mod config; // 配置系统模块
pub mod setup; // 应用初始化模块
pub mod storage; // 偏好存储模块
pub mod theme; // 主题系统模块
pub mod utils; // 工具和错误处理模块

pub use setup::AppContext;
pub use theme::{ThemeCommands, ThemeId, ThemeStore};
