/*!
 * 内置主题目录
 *
 * 提供主题标识到主题定义的静态映射，进程生命周期内不可变。
 */

use super::types::{ThemeColors, ThemeDefinition, ThemeId};

/// 默认主题
pub const DEFAULT_THEME: ThemeId = ThemeId::Light;

/// 按声明顺序排列的主题定义，下标与 `ThemeId::ALL` 一致
static THEMES: [ThemeDefinition; 5] = [
    ThemeDefinition {
        id: ThemeId::Light,
        title: "Light",
        description: "Light theme with neutral colors",
        colors: ThemeColors {
            page_background: "#FFFFFF",
            text_primary: "#000000",
            text_secondary: "#666666",
            primary: "#007AFF",
            button_background: "#007AFF",
            button_text: "#FFFFFF",
            border: "#E0E0E0",
        },
    },
    ThemeDefinition {
        id: ThemeId::Dark,
        title: "Dark",
        description: "Dark theme with eye-friendly colors",
        colors: ThemeColors {
            page_background: "#1C1C1E",
            text_primary: "#FFFFFF",
            text_secondary: "#A0A0A0",
            primary: "#0A84FF",
            button_background: "#0A84FF",
            button_text: "#FFFFFF",
            border: "#424245",
        },
    },
    ThemeDefinition {
        id: ThemeId::Blue,
        title: "Blue",
        description: "Blue theme with cool tones",
        colors: ThemeColors {
            page_background: "#E3F2FD",
            text_primary: "#1565C0",
            text_secondary: "#455A64",
            primary: "#1976D2",
            button_background: "#1976D2",
            button_text: "#FFFFFF",
            border: "#90CAF9",
        },
    },
    ThemeDefinition {
        id: ThemeId::Orange,
        title: "Orange",
        description: "Orange theme with warm tones",
        colors: ThemeColors {
            page_background: "#FFE8D6",
            text_primary: "#E65100",
            text_secondary: "#5D4037",
            primary: "#F57C00",
            button_background: "#F57C00",
            button_text: "#FFFFFF",
            border: "#FFCC80",
        },
    },
    ThemeDefinition {
        id: ThemeId::White,
        title: "White",
        description: "White theme with minimal contrast",
        colors: ThemeColors {
            page_background: "#FAFAFA",
            text_primary: "#333333",
            text_secondary: "#888888",
            primary: "#555555",
            button_background: "#555555",
            button_text: "#FFFFFF",
            border: "#EEEEEE",
        },
    },
];

/// 获取指定主题的定义
pub fn lookup(id: ThemeId) -> &'static ThemeDefinition {
    let index = match id {
        ThemeId::Light => 0,
        ThemeId::Dark => 1,
        ThemeId::Blue => 2,
        ThemeId::Orange => 3,
        ThemeId::White => 4,
    };
    &THEMES[index]
}

/// 获取全部主题定义（声明顺序）
pub fn all() -> &'static [ThemeDefinition] {
    &THEMES
}

/// 按名称查找主题，用于校验来自存储或调用方的外部输入
pub fn find(name: &str) -> Option<&'static ThemeDefinition> {
    name.parse::<ThemeId>().ok().map(lookup)
}
