//! # 数据模型模块
//!
//! 定义资源目录与复制请求的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `batch/` 使用
//! - 子模块: request, resource

pub mod request;
pub mod resource;

pub use request::AssetRequest;
pub use resource::ResourceCategory;
