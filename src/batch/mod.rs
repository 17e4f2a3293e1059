//! # 批量处理模块
//!
//! 提供顺序执行的批量文件操作能力。
//!
//! ## 功能
//! - 按固定顺序遍历类别与密度目录
//! - 逐个执行复制/移动
//! - 错误就地打印并计数，不中断批处理
//!
//! ## 依赖关系
//! - 被 `commands/propagate.rs` 使用
//! - 使用 `models/`, `parsers/`, `utils/output.rs`

pub mod runner;

pub use runner::{BatchResult, BatchRunner};
