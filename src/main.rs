// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 页面生成器
//!
//! 读取一个 TOML 页面描述，构建 [`PageDocument`] 并输出完整的 HTML：
//! - 日志通过 log4rs 的 YAML 配置输出到 stderr，stdout 只包含页面本身
//! - 页脚时间戳来源由页面描述中的 `timestamp` 决定
//! - 任何错误都会被记录并以退出码 1 结束

use std::{
    fs::File,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};

use webpage::{
    modification,
    param::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_CONFIG_PATH},
    Config, Exception, PageDocument,
};

#[derive(Debug, Parser)]
#[command(name = "webpage")]
#[command(about = "Render a single HTML page from a TOML description")]
#[command(version)]
struct Args {
    /// 页面描述文件
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// 输出文件，缺省时写到标准输出
    #[arg(long)]
    output: Option<String>,

    /// log4rs 配置文件
    #[arg(long, default_value = DEFAULT_LOG_CONFIG_PATH)]
    log_config: String,
}

fn main() -> ExitCode {
    // 1. 尽早记录进程启动时间，作为时间戳的回退值
    let _ = modification::process_start();

    let args = Args::parse();

    // 2. 日志初始化失败不影响页面生成
    if let Err(e) = log4rs::init_file(&args.log_config, Default::default()) {
        eprintln!("无法载入日志配置{}：{}，将不输出日志", args.log_config, e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("页面生成失败：{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Exception> {
    let config = Config::from_toml(&args.config)?;
    let page: PageDocument = config.build_page()?;
    let source = config.timestamp_source()?;
    let html = page.render_with(source.as_ref());

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                error!("无法创建输出文件{}：{}", path, e);
                Exception::OutputWriteFailed
            })?;
            file.write_all(html.as_bytes()).map_err(|e| {
                error!("写入{}失败：{}", path, e);
                Exception::OutputWriteFailed
            })?;
            info!("已写入{}，共{}字节", path, html.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes()).map_err(|e| {
                error!("写入标准输出失败：{}", e);
                Exception::OutputWriteFailed
            })?;
            info!("已输出到标准输出，共{}字节", html.len());
        }
    }
    Ok(())
}
