//! # Dpicopy - Android 资源图片批量复制工具
//!
//! 把一张图片资源同步到 Android 项目 res 目录下的全部密度子目录
//! (drawable / mipmap, 基础目录 + 六个密度后缀)，支持复制、重命名
//! 以及仅重命名 (移动) 三种用法。
//!
//! ## 用法
//! - `dpicopy logo.png --drawable` - 复制到所有 drawable 目录
//! - `dpicopy old.png>new.png --mipmap --no-copy` - 原地重命名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (文件名解析器)
//!   │     ├── batch/     (批量文件操作)
//!   │     └── models/    (数据模型)
//!   ├── config.rs   (目录解析与持久化)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
