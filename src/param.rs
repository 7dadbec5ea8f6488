// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 页面骨架参数与常量模块
//!
//! 该模块集中定义了 `webpage` 渲染时使用的固定字面量，包括：
//! - HTML 骨架中写死的语言、字体样式表与作者信息。
//! - 页脚"最后修改时间"的前缀与时间格式。
//! - HTML 实体转义表。
//! - 可执行程序默认读取的配置文件路径。

use std::collections::HashMap;
use lazy_static::lazy_static;

/// 页面 `<html>` 标签的 `lang` 属性
pub const DOCUMENT_LANG: &str = "fr";

/// 骨架中固定引入的 Google Fonts 样式表
pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Josefin+Sans:wght@500&display=swap";

/// `<meta name="author">` 的内容
pub const AUTHOR: &str = "Hikari Hei'an";

/// 页脚时间戳的前缀
pub const LAST_MODIFICATION_PREFIX: &str = "Last modification: ";

/// 页脚时间戳格式，形如 `05 March 2024 - 14:07:09`。
///
/// chrono 的 `%B` 始终输出英文月份全称，不受系统区域设置影响。
pub const LAST_MODIFICATION_FORMAT: &str = "%d %B %Y - %H:%M:%S";

/// 配置文件中 `fixed_timestamp` 字段的解析格式
pub const FIXED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 默认的页面描述文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/development.toml";

/// 默认的日志配置文件路径
pub const DEFAULT_LOG_CONFIG_PATH: &str = "config/log4rs.yaml";

lazy_static! {
    /// 需要转义的字符与其 HTML5 命名实体的映射表。
    ///
    /// 单引号使用 HTML5 才引入的 `&apos;`，而不是数字实体。
    pub static ref HTML_ENTITIES: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        map.insert('&', "&amp;");
        map.insert('<', "&lt;");
        map.insert('>', "&gt;");
        map.insert('"', "&quot;");
        map.insert('\'', "&apos;");
        map
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_table_complete() {
        assert_eq!(HTML_ENTITIES.len(), 5);
        for c in ['&', '<', '>', '"', '\''] {
            let entity = HTML_ENTITIES.get(&c).unwrap();
            assert!(entity.starts_with('&'));
            assert!(entity.ends_with(';'));
        }
    }

    #[test]
    fn test_font_url_is_unescaped() {
        // 骨架要求原样输出 `&display`，不能被转义成 `&amp;display`
        assert!(FONT_STYLESHEET_URL.contains("&display=swap"));
    }
}
