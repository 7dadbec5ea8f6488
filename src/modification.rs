//! # 最后修改时间模块
//!
//! 页脚中的 `Last modification: ...` 来自进程所处的环境，而不是页面自身的状态。
//! 这里把"从哪里取时间"抽象成 [`ModificationSource`]，由调用方显式传入，
//! 这样渲染结果在测试中是确定的。

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, TimeZone};
use lazy_static::lazy_static;
use log::{debug, warn};

use crate::{
    exception::Exception,
    param::{LAST_MODIFICATION_FORMAT, LAST_MODIFICATION_PREFIX},
};

lazy_static! {
    /// 进程启动时间，第一次访问时记录。可执行程序会在启动时立即访问一次。
    static ref PROCESS_START: DateTime<Local> = Local::now();
}

/// 返回进程启动时间。
pub fn process_start() -> DateTime<Local> {
    *PROCESS_START
}

/// 时间来源。
#[cfg_attr(test, mockall::automock)]
pub trait ModificationSource {
    fn modified(&self) -> Result<DateTime<Local>, Exception>;
}

/// 当前正在运行的可执行文件的修改时间。
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableModified;

impl ModificationSource for ExecutableModified {
    fn modified(&self) -> Result<DateTime<Local>, Exception> {
        let path = std::env::current_exe().map_err(|e| {
            debug!("无法定位当前可执行文件：{}", e);
            Exception::ModificationTimeUnavailable
        })?;
        file_modified(&path)
    }
}

/// 任意文件的修改时间，例如页面对应的源文件。
#[derive(Debug, Clone)]
pub struct FileModified(pub PathBuf);

impl ModificationSource for FileModified {
    fn modified(&self) -> Result<DateTime<Local>, Exception> {
        file_modified(&self.0)
    }
}

/// 进程启动时间，永远不会失败。
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessStart;

impl ModificationSource for ProcessStart {
    fn modified(&self) -> Result<DateTime<Local>, Exception> {
        Ok(process_start())
    }
}

/// 固定时刻。
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(pub DateTime<Local>);

impl ModificationSource for FixedTimestamp {
    fn modified(&self) -> Result<DateTime<Local>, Exception> {
        Ok(self.0)
    }
}

fn file_modified(path: &Path) -> Result<DateTime<Local>, Exception> {
    let metadata = fs::metadata(path).map_err(|e| {
        debug!("无法读取{}的元数据：{}", path.display(), e);
        Exception::ModificationTimeUnavailable
    })?;
    let modified = metadata.modified().map_err(|e| {
        debug!("平台不支持读取{}的修改时间：{}", path.display(), e);
        Exception::ModificationTimeUnavailable
    })?;
    Ok(modified.into())
}

/// 格式化为 `Last modification: DD Month YYYY - HH:MM:SS`，月份为英文全称。
pub fn format_last_modification<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{}{}",
        LAST_MODIFICATION_PREFIX,
        time.format(LAST_MODIFICATION_FORMAT)
    )
}

/// 生成页脚时间戳。时间来源失败时回退到进程启动时间。
pub fn last_modification<S: ModificationSource + ?Sized>(source: &S) -> String {
    let time = match source.modified() {
        Ok(t) => t,
        Err(e) => {
            warn!("{}，改用进程启动时间", e);
            process_start()
        }
    };
    format_last_modification(&time)
}
