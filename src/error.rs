//! # 统一错误处理模块
//!
//! 定义 Dpicopy 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意: 单次文件操作的失败不走这里 —— 它们在 `batch/runner.rs`
//! 中就地打印并计数，不会中断批处理。这里只定义会终止整个
//! 运行的致命错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Dpicopy 统一错误类型
#[derive(Error, Debug)]
pub enum DpicopyError {
    // ─────────────────────────────────────────────────────────────
    // 配置解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("No backup config found, you must provide a from-dir")]
    SourceDirRequired,

    #[error("No backup config found, you must provide both from-dir and to-dir")]
    BothDirsRequired,

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input")]
    InputError(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 文件名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid filenames: {source_name}>{dest_name}")]
    InvalidFileNames {
        source_name: String,
        dest_name: String,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DpicopyError>;
