/*!
 * 主题相关的命令接口
 *
 * 提供给界面层调用的主题管理接口，包括获取当前主题、
 * 获取主题列表和切换主题。
 */

use super::store::ThemeStore;
use super::types::{StatusBarStyle, ThemeDefinition, ThemeId};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// 主题信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInfo {
    /// 主题标识
    pub id: ThemeId,

    /// 显示标题
    pub title: String,

    /// 主题描述
    pub description: String,

    /// 是否为当前主题
    pub is_current: bool,
}

/// 当前主题
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTheme {
    pub theme: &'static ThemeDefinition,
    pub status_bar_style: StatusBarStyle,
}

/// 主题命令
#[derive(Clone)]
pub struct ThemeCommands {
    store: Arc<ThemeStore>,
}

impl ThemeCommands {
    pub fn new(store: Arc<ThemeStore>) -> Self {
        Self { store }
    }

    /// 获取当前主题数据
    pub fn get_current_theme(&self) -> CurrentTheme {
        let theme = self.store.current_theme_data();
        CurrentTheme {
            theme,
            status_bar_style: theme.status_bar_style(),
        }
    }

    /// 获取所有可用主题
    pub fn get_available_themes(&self) -> Vec<ThemeInfo> {
        let current = self.store.current_theme();

        self.store
            .available_themes()
            .iter()
            .map(|theme| ThemeInfo {
                id: theme.id,
                title: theme.title.to_string(),
                description: theme.description.to_string(),
                is_current: theme.id == current,
            })
            .collect()
    }

    /// 切换主题并等待写入完成
    ///
    /// 返回主题名称是否有效。写入失败不影响返回值。
    pub async fn set_theme(&self, name: &str) -> bool {
        let Some(handle) = self.store.set_theme(name) else {
            return false;
        };

        info!("主题已切换: {}", name);
        if let Err(e) = handle.await {
            error!("主题保存任务异常结束: {}", e);
        }
        true
    }
}
