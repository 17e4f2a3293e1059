//! # 目录配置模块
//!
//! 负责两件事:
//! 1. 把命令行参数与上一次持久化的目录组合成本次运行的 [`RunConfig`];
//! 2. 维护工作目录下的 `config.json` 缓存 (读取失败一律视为无缓存)。
//!
//! ## 依赖关系
//! - 被 `commands/propagate.rs` 使用
//! - 使用 `serde` / `serde_json` 持久化

use crate::cli::Cli;
use crate::error::{DpicopyError, Result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 持久化配置文件名，位于进程工作目录
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 上一次运行持久化的目录对
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedDirs {
    #[serde(rename = "from-dir")]
    pub from_dir: String,
    #[serde(rename = "to-dir")]
    pub to_dir: String,
}

impl PersistedDirs {
    /// 由本次解析出的目录对构造
    pub fn new(from_dir: &Path, to_dir: &Path) -> Self {
        Self {
            from_dir: from_dir.display().to_string(),
            to_dir: to_dir.display().to_string(),
        }
    }

    /// 读取工作目录下的配置缓存
    ///
    /// 文件不存在、无法读取或无法解析都视为没有缓存。
    pub fn load() -> Option<Self> {
        let content = fs::read_to_string(CONFIG_FILE_NAME).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// 覆盖写入配置缓存
    pub fn store(&self) -> Result<()> {
        let content = serde_json::to_string(self).map_err(|e| DpicopyError::FileWriteError {
            path: CONFIG_FILE_NAME.to_string(),
            source: e.into(),
        })?;
        fs::write(CONFIG_FILE_NAME, content).map_err(|e| DpicopyError::FileWriteError {
            path: CONFIG_FILE_NAME.to_string(),
            source: e,
        })
    }
}

/// 本次运行的完整配置，构造后不再变化
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 源 res 目录
    pub source_dir: PathBuf,
    /// 目标 res 目录; 移动模式下强制等于 `source_dir`
    pub dest_dir: PathBuf,
    /// 移动 (重命名) 而非复制
    pub move_only: bool,
    /// 处理 drawable 目录
    pub use_drawable: bool,
    /// 处理 mipmap 目录
    pub use_mipmap: bool,
}

impl RunConfig {
    /// 由命令行参数与已解析的目录对构造
    pub fn new(source_dir: PathBuf, dest_dir: PathBuf, cli: &Cli) -> Self {
        // 移动模式是原地重命名，目标根目录强制取源根目录
        let dest_dir = if cli.no_copy { source_dir.clone() } else { dest_dir };
        Self {
            source_dir,
            dest_dir,
            move_only: cli.no_copy,
            use_drawable: cli.drawable,
            use_mipmap: cli.mipmap,
        }
    }
}

/// 把命令行参数与持久化缓存合并为 (源目录, 目标目录)
///
/// 回退规则: 两个目录缺省时都回退到缓存里的 from-dir 值 (历史行为，
/// to-dir 并不读取缓存的 to-dir 键)。移动模式下目标目录缺省再回退到
/// 源目录本身。
pub fn resolve_dirs(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
    let persisted_from = PersistedDirs::load().map(|dirs| PathBuf::from(dirs.from_dir));

    let source_dir = cli.from_dir.clone().or_else(|| persisted_from.clone());
    let dest_dir = cli.to_dir.clone().or(persisted_from);

    if cli.no_copy {
        let source_dir = source_dir.ok_or(DpicopyError::SourceDirRequired)?;
        let dest_dir = dest_dir.unwrap_or_else(|| source_dir.clone());
        Ok((source_dir, dest_dir))
    } else {
        match (source_dir, dest_dir) {
            (Some(source_dir), Some(dest_dir)) => Ok((source_dir, dest_dir)),
            _ => Err(DpicopyError::BothDirsRequired),
        }
    }
}
