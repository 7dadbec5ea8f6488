// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 页面本身的拼接与渲染不会失败，这里的异常只来自与外部环境打交道的部分：
//! 读取可执行文件的修改时间、加载页面描述文件、读取正文文件以及写出结果。

use std::error::Error;
use std::fmt;

/// 构建或输出页面过程中发生的异常类型。
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exception {
    /// 无法读取当前可执行文件的元数据或修改时间。
    /// `last_modification` 遇到该错误时会回退到进程启动时间。
    ModificationTimeUnavailable,
    /// 页面描述文件不存在或无法读取。
    ConfigNotFound,
    /// 页面描述文件不是合法的 TOML，或字段类型不符。
    ConfigParseFailed,
    /// `fixed_timestamp` 缺失或无法按 `%Y-%m-%d %H:%M:%S` 解析。
    InvalidTimestamp,
    /// `content_files` 中列出的某个文件无法读取。
    ContentFileUnreadable,
    /// 渲染结果无法写入目标文件或标准输出。
    OutputWriteFailed,
}

use Exception::*;

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModificationTimeUnavailable => {
                write!(f, "Modification time of the executable is unavailable")
            }
            ConfigNotFound => write!(f, "Page description file not found"),
            ConfigParseFailed => write!(f, "Page description file can't be parsed"),
            InvalidTimestamp => write!(f, "Invalid fixed timestamp"),
            ContentFileUnreadable => write!(f, "Content file can't be read"),
            OutputWriteFailed => write!(f, "Couldn't write the rendered page"),
        }
    }
}

impl Error for Exception {}
