//! # 文件名 token 解析器
//!
//! 把一个命令行 token (`name.ext` 或 `old.ext>new.ext`) 解析为
//! [`AssetRequest`]，并校验两侧文件名格式。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/request.rs`

use crate::error::{DpicopyError, Result};
use crate::models::AssetRequest;

use regex::Regex;

/// 解析一个 token 为复制请求
///
/// `>` 分隔符表示重命名，按最后一个分隔符切分; 没有分隔符时
/// 源文件名与目标文件名相同。任何一侧不满足文件名格式则整个
/// 请求被拒绝。
pub fn parse_request(token: &str) -> Result<AssetRequest> {
    let (source_name, dest_name) = match token.rsplit_once('>') {
        Some((source, dest)) => (source, dest),
        None => (token, token),
    };

    if !is_valid_file_name(source_name) || !is_valid_file_name(dest_name) {
        return Err(DpicopyError::InvalidFileNames {
            source_name: source_name.to_string(),
            dest_name: dest_name.to_string(),
        });
    }

    Ok(AssetRequest {
        source_name: source_name.to_string(),
        dest_name: dest_name.to_string(),
    })
}

/// 文件名必须以 "词字符段 + 至少一个 .后缀段" 开头
///
/// 只锚定开头不锚定结尾，与历史行为保持一致。
fn is_valid_file_name(name: &str) -> bool {
    let pattern = Regex::new(r"^\w+(\.\w+)+").unwrap();
    pattern.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_token_keeps_both_names_equal() {
        let request = parse_request("logo.png").unwrap();
        assert_eq!(request.source_name, "logo.png");
        assert_eq!(request.dest_name, "logo.png");
    }

    #[test]
    fn test_rename_token_splits_on_separator() {
        let request = parse_request("old.png>new.png").unwrap();
        assert_eq!(request.source_name, "old.png");
        assert_eq!(request.dest_name, "new.png");
    }

    #[test]
    fn test_multiple_separators_split_on_last() {
        // 与贪婪匹配语义一致: 前半段整体作为源文件名
        let request = parse_request("a.png>b.png>c.png").unwrap();
        assert_eq!(request.source_name, "a.png>b.png");
        assert_eq!(request.dest_name, "c.png");
    }

    #[test]
    fn test_multi_dot_names_are_valid() {
        let request = parse_request("ic_launcher.9.png").unwrap();
        assert_eq!(request.source_name, "ic_launcher.9.png");
    }

    #[test]
    fn test_name_without_extension_is_rejected() {
        let err = parse_request("icon").unwrap_err();
        assert_eq!(format!("{}", err), "Invalid filenames: icon>icon");
    }

    #[test]
    fn test_rename_with_invalid_dest_is_rejected() {
        let err = parse_request("logo.png>newlogo").unwrap_err();
        assert_eq!(format!("{}", err), "Invalid filenames: logo.png>newlogo");
    }

    #[test]
    fn test_empty_sides_are_rejected() {
        assert!(parse_request(">logo.png").is_err());
        assert!(parse_request("logo.png>").is_err());
    }

    #[test]
    fn test_name_starting_with_dot_is_rejected() {
        assert!(parse_request(".png").is_err());
    }
}
