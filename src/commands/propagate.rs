//! # propagate 命令实现
//!
//! 完整运行流程: 解析目录 -> 覆盖写入缓存 -> 交互确认 ->
//! 批量执行 -> 汇总。
//!
//! ## 依赖关系
//! - 使用 `cli/` 定义的参数
//! - 使用 `config.rs` 解析与持久化目录
//! - 使用 `batch/runner.rs` 执行文件操作
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::batch::BatchRunner;
use crate::cli::Cli;
use crate::config::{self, PersistedDirs, RunConfig};
use crate::error::Result;
use crate::utils::{output, prompt};

/// 执行 propagate 命令，返回失败操作总数
pub fn execute(cli: Cli) -> Result<usize> {
    let (source_dir, dest_dir) = config::resolve_dirs(&cli)?;

    // 确认之前就覆盖缓存，用户取消也保留本次解析出的目录对
    PersistedDirs::new(&source_dir, &dest_dir).store()?;

    let config = RunConfig::new(source_dir, dest_dir, &cli);

    println!();
    output::print_resolved_dir("from-dir", &config.source_dir.display().to_string());
    output::print_resolved_dir("to-dir", &config.dest_dir.display().to_string());

    if !prompt::confirm("\nContinue with these directories? [Y/n]>")? {
        // 用户取消: 不执行、不汇总
        return Ok(0);
    }

    let result = BatchRunner::new(&config).run(&cli.files);

    output::print_summary(result.failed);

    Ok(result.failed)
}
