// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 页面文档模块
//!
//! [`PageDocument`] 按调用顺序累积 `<head>` 与 `<body>` 的片段，最后一次性套入固定骨架。
//!
//! ## 安全提示
//! 所有追加方法以及标题都**原样**拼接进 HTML，不做任何转义。
//! 来自用户的数据必须先经过 [`escape_string`](crate::util::escape_string)。

use log::debug;

use crate::{
    modification::{last_modification, ExecutableModified, ModificationSource},
    param::{AUTHOR, DOCUMENT_LANG, FONT_STYLESHEET_URL},
    util,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    title: String,
    head: String,
    body: String,
}

impl PageDocument {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            head: String::new(),
            body: String::new(),
        }
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn append_to_head(&mut self, content: &str) {
        self.head.push_str(content);
    }

    pub fn append_css(&mut self, css: &str) {
        self.head.push_str(&format!("<style>{}</style>", css));
    }

    pub fn append_css_url(&mut self, url: &str) {
        self.head.push_str(&format!(
            r#"<link rel="stylesheet" media="screen" href="{}">"#,
            url
        ));
    }

    pub fn append_js(&mut self, js: &str) {
        self.head.push_str(&format!("<script> {} </script>", js));
    }

    pub fn append_js_url(&mut self, url: &str) {
        self.head
            .push_str(&format!(r#"<script src="{}"></script>"#, url));
    }

    pub fn append_content(&mut self, content: &str) {
        self.body.push_str(content);
    }

    pub fn add_icon(&mut self, url: &str) {
        self.append_to_head(&format!(r#"<link rel="icon" href="{}">"#, url));
    }

    /// 等同于 [`util::escape_string`]。
    pub fn escape_string(s: &str) -> String {
        util::escape_string(s)
    }

    /// 使用当前可执行文件的修改时间渲染整页。
    pub fn render(&self) -> String {
        self.render_with(&ExecutableModified)
    }

    /// 使用指定的时间来源渲染整页。
    ///
    /// 骨架逐字节固定：注意其中没有 `</head>`，`{head}` 之后直接是 `<body>`。
    pub fn render_with<S: ModificationSource + ?Sized>(&self, source: &S) -> String {
        let footer = last_modification(source);
        debug!(
            "渲染页面「{}」：head {} 字节，body {} 字节",
            self.title,
            self.head.len(),
            self.body.len()
        );
        format!(
            r#"<!DOCTYPE HTML>
<html lang="{lang}">
  <head>
    <meta charset="UTF-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link href="{font}" rel="stylesheet">
    <meta name="author" content="{author}">
    <title>{title}</title>
    {head}
  <body>
    {body}
    <footer class="center_text">{footer}</footer>
  </body>
</html>"#,
            lang = DOCUMENT_LANG,
            font = FONT_STYLESHEET_URL,
            author = AUTHOR,
            title = self.title,
            head = self.head,
            body = self.body,
            footer = footer,
        )
    }
}
