//! # 交互确认工具
//!
//! 运行前的一次阻塞式 stdin 确认。
//!
//! ## 依赖关系
//! - 被 `commands/propagate.rs` 使用

use crate::error::Result;

use std::io::{self, Write};

/// 在 stdout 打印问题并从 stdin 读一行作为回答
///
/// 空输入、`y`、`Y` 视为确认; 只剥离行尾换行符，不剥离空格。
pub fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim_end_matches(['\r', '\n']);

    Ok(matches!(answer, "" | "y" | "Y"))
}
