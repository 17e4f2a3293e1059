//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `batch/`, `utils/`
//! - 子模块: propagate

pub mod propagate;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令，返回失败操作总数
pub fn run(cli: Cli) -> Result<usize> {
    propagate::execute(cli)
}
