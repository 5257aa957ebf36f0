/*!
 * 主题系统类型定义
 *
 * 包含主题标识、主题定义和颜色方案等数据结构。
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 主题标识
///
/// 封闭集合，新增变体时必须同步扩展主题目录。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Light,
    Dark,
    Blue,
    Orange,
    White,
}

impl ThemeId {
    /// 按声明顺序排列的全部主题标识
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Light,
        ThemeId::Dark,
        ThemeId::Blue,
        ThemeId::Orange,
        ThemeId::White,
    ];

    /// 持久化与展示使用的字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
            ThemeId::Blue => "blue",
            ThemeId::Orange => "orange",
            ThemeId::White => "white",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 未知主题标识
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme identifier: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// 主题颜色
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// 页面背景
    pub page_background: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    /// 主色调
    pub primary: &'static str,
    pub button_background: &'static str,
    pub button_text: &'static str,
    pub border: &'static str,
}

/// 主题定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    /// 主题标识
    pub id: ThemeId,

    /// 显示标题
    pub title: &'static str,

    /// 主题描述
    pub description: &'static str,

    /// 颜色方案
    pub colors: ThemeColors,
}

/// 状态栏内容样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    LightContent,
    DarkContent,
}

impl ThemeDefinition {
    /// 宿主外壳使用的状态栏样式，只有深色主题使用浅色内容
    pub fn status_bar_style(&self) -> StatusBarStyle {
        match self.id {
            ThemeId::Dark => StatusBarStyle::LightContent,
            _ => StatusBarStyle::DarkContent,
        }
    }
}
