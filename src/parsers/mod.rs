//! # 解析器模块
//!
//! 把命令行 token 解析为复制请求。
//!
//! ## 依赖关系
//! - 被 `batch/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: request

pub mod request;

pub use request::parse_request;
