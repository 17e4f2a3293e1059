//! # 美化输出工具
//!
//! 提供统一的终端输出样式。四类消息: 致命错误、单次操作失败、
//! 单次操作成功、收尾汇总，各有固定的标记与颜色。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印致命错误消息 (运行开始前)
pub fn print_error(msg: &str) {
    eprintln!("{}{}", "Error: ".red().bold(), msg.red().bold());
}

/// 打印单次操作失败消息
pub fn print_failure(msg: &str) {
    println!("[{}] Failure: {}", "X".red().bold(), msg.red().bold());
}

/// 打印单次操作成功消息
pub fn print_success(msg: &str) {
    println!("[{}] Success: {}", "+".green().bold(), msg);
}

/// 打印一次文件操作的进度行
pub fn print_action(verb: &str, from: &str, to: &str) {
    println!(
        "\n>> {} {} to {}",
        verb,
        from.yellow().bold(),
        to.yellow().bold()
    );
}

/// 打印已解析的目录
pub fn print_resolved_dir(label: &str, dir: &str) {
    println!("{}: {}", label, dir.cyan().bold());
}

/// 打印收尾汇总
pub fn print_summary(failures: usize) {
    println!();
    if failures == 0 {
        println!("{}", ">> All Done! <<".green().bold());
    } else {
        println!(
            "{}",
            format!(">> [!] Finished with {} failures! <<", failures)
                .red()
                .bold()
        );
    }
}
