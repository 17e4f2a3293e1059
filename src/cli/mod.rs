//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。本工具只有一条命令，
//! 因此参数直接挂在顶层 `Cli` 上，不使用子命令。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/propagate.rs`

use clap::Parser;
use std::path::PathBuf;

/// Dpicopy - Android 资源图片批量复制工具
#[derive(Parser, Debug)]
#[command(name = "dpicopy")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Copy or rename an image asset across every Android density-scaled resource directory",
    long_about = "Copy or rename an image asset across every Android density-scaled resource \
                  directory.\nDirectory paths must lead to the res folder and filenames must \
                  include their extension.\nTo rename a file simply use oldName.png>newName.png"
)]
pub struct Cli {
    /// A drawable file name. Use oldName.png>newName.png to rename it as well
    #[arg(value_name = "file-name", required = true)]
    pub files: Vec<String>,

    /// Directory to the source android project res folder
    #[arg(long, value_name = "dir")]
    pub from_dir: Option<PathBuf>,

    /// Directory to the target android project res folder
    #[arg(long, value_name = "dir")]
    pub to_dir: Option<PathBuf>,

    /// Use drawable directories
    #[arg(long, default_value_t = false)]
    pub drawable: bool,

    /// Use mipmap directories
    #[arg(long, default_value_t = false)]
    pub mipmap: bool,

    /// Don't copy, only rename (move in place)
    #[arg(long, default_value_t = false)]
    pub no_copy: bool,
}
