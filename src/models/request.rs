//! # 复制请求模型
//!
//! 一个命令行 token 对应一次复制/重命名请求。
//!
//! ## 依赖关系
//! - 由 `parsers/request.rs` 构造
//! - 被 `batch/runner.rs` 消费

/// 一次资源复制请求: 源文件名与目标文件名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    /// 源文件名 (含扩展名)
    pub source_name: String,
    /// 目标文件名; 非重命名请求与 `source_name` 相同
    pub dest_name: String,
}
