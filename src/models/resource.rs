//! # 资源目录模型
//!
//! Android res 目录结构的固定描述: 两个资源类别 (drawable / mipmap)，
//! 每个类别一个基础目录加六个密度后缀目录。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用

/// 密度后缀，固定顺序
pub const DENSITY_VARIANTS: [&str; 6] = ["hdpi", "ldpi", "mdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

/// 资源类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    /// General image resources
    Drawable,
    /// App-icon style resources
    Mipmap,
}

impl ResourceCategory {
    /// 类别对应的基础目录名
    pub fn dir_name(self) -> &'static str {
        match self {
            ResourceCategory::Drawable => "drawable",
            ResourceCategory::Mipmap => "mipmap",
        }
    }

    /// 类别下的全部目录名: 基础目录在前，随后按固定顺序排列六个密度目录
    pub fn directories(self) -> Vec<String> {
        let mut dirs = Vec::with_capacity(1 + DENSITY_VARIANTS.len());
        dirs.push(self.dir_name().to_string());
        for variant in DENSITY_VARIANTS {
            dirs.push(format!("{}-{}", self.dir_name(), variant));
        }
        dirs
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
