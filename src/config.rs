use serde_derive::Deserialize;
use serde_derive::Serialize;

use chrono::{Local, NaiveDateTime, TimeZone};
use log::{error, info, warn};
use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;

use crate::exception::Exception;
use crate::modification::{
    ExecutableModified, FileModified, FixedTimestamp, ModificationSource, ProcessStart,
};
use crate::page::PageDocument;
use crate::param::FIXED_TIMESTAMP_FORMAT;
use crate::util::escape_string;

/// 页脚时间戳的来源
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKind {
    #[default]
    Executable,
    ProcessStart,
    File,
    Fixed,
}

/// 页面描述文件
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    title: String,
    #[serde(default = "default_escape_title")]
    escape_title: bool,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    css_urls: Vec<String>,
    #[serde(default)]
    css: Vec<String>,
    #[serde(default)]
    js_urls: Vec<String>,
    #[serde(default)]
    js: Vec<String>,
    #[serde(default)]
    head: Vec<String>,
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    content_files: Vec<String>,
    #[serde(default)]
    timestamp: TimestampKind,
    #[serde(default)]
    fixed_timestamp: Option<String>,
    #[serde(default)]
    timestamp_file: Option<String>,
}

fn default_escape_title() -> bool {
    true
}

impl Config {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            escape_title: default_escape_title(),
            icon: None,
            css_urls: Vec::new(),
            css: Vec::new(),
            js_urls: Vec::new(),
            js: Vec::new(),
            head: Vec::new(),
            content: Vec::new(),
            content_files: Vec::new(),
            timestamp: TimestampKind::default(),
            fixed_timestamp: None,
            timestamp_file: None,
        }
    }

    pub fn from_toml(filename: &str) -> Result<Self, Exception> {
        let mut file = match File::open(filename) {
            Ok(f) => f,
            Err(e) => {
                error!("无法打开页面描述文件{}：{}", filename, e);
                return Err(Exception::ConfigNotFound);
            }
        };
        let mut str_val = String::new();
        if let Err(e) = file.read_to_string(&mut str_val) {
            error!("读取页面描述文件{}失败：{}", filename, e);
            return Err(Exception::ConfigNotFound);
        }
        Self::from_toml_str(&str_val)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Exception> {
        match toml::from_str::<Config>(s) {
            Ok(config) => {
                info!("页面描述已载入，标题：{}", config.title);
                Ok(config)
            }
            Err(e) => {
                error!("无法从页面描述构建配置对象：{}", e);
                Err(Exception::ConfigParseFailed)
            }
        }
    }

    /// 按固定顺序把描述中的片段追加到新页面：
    /// icon、css_urls、css、js_urls、js、head、content、content_files。
    pub fn build_page(&self) -> Result<PageDocument, Exception> {
        let title = if self.escape_title {
            escape_string(&self.title)
        } else {
            self.title.clone()
        };
        let mut page = PageDocument::new(&title);

        if let Some(icon) = &self.icon {
            page.add_icon(icon);
        }
        for url in &self.css_urls {
            page.append_css_url(url);
        }
        for css in &self.css {
            page.append_css(css);
        }
        for url in &self.js_urls {
            page.append_js_url(url);
        }
        for js in &self.js {
            page.append_js(js);
        }
        for fragment in &self.head {
            page.append_to_head(fragment);
        }
        for fragment in &self.content {
            page.append_content(fragment);
        }
        for filename in &self.content_files {
            let mut file = File::open(filename).map_err(|e| {
                error!("无法打开正文文件{}：{}", filename, e);
                Exception::ContentFileUnreadable
            })?;
            let mut text = String::new();
            file.read_to_string(&mut text).map_err(|e| {
                error!("读取正文文件{}失败：{}", filename, e);
                Exception::ContentFileUnreadable
            })?;
            page.append_content(&text);
        }
        Ok(page)
    }

    pub fn timestamp_source(&self) -> Result<Box<dyn ModificationSource>, Exception> {
        match self.timestamp {
            TimestampKind::Executable => Ok(Box::new(ExecutableModified)),
            TimestampKind::ProcessStart => Ok(Box::new(ProcessStart)),
            TimestampKind::File => match &self.timestamp_file {
                Some(path) => Ok(Box::new(FileModified(PathBuf::from(path)))),
                None => {
                    warn!("timestamp = \"file\" 但未指定timestamp_file，改用可执行文件的修改时间");
                    Ok(Box::new(ExecutableModified))
                }
            },
            TimestampKind::Fixed => {
                let raw = match &self.fixed_timestamp {
                    Some(s) => s,
                    None => {
                        error!("timestamp = \"fixed\" 时必须提供fixed_timestamp");
                        return Err(Exception::InvalidTimestamp);
                    }
                };
                let naive = NaiveDateTime::parse_from_str(raw, FIXED_TIMESTAMP_FORMAT)
                    .map_err(|e| {
                        error!("无法解析fixed_timestamp「{}」：{}", raw, e);
                        Exception::InvalidTimestamp
                    })?;
                match Local.from_local_datetime(&naive).earliest() {
                    Some(time) => Ok(Box::new(FixedTimestamp(time))),
                    None => {
                        error!("fixed_timestamp「{}」在本地时区中不存在", raw);
                        Err(Exception::InvalidTimestamp)
                    }
                }
            }
        }
    }
}

impl Config {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn escape_title(&self) -> bool {
        self.escape_title
    }

    pub fn timestamp(&self) -> TimestampKind {
        self.timestamp
    }

    pub fn content_files(&self) -> &[String] {
        &self.content_files
    }
}
