//! # 批量执行器
//!
//! 顺序执行全部文件操作: 每个 token 先 drawable 后 mipmap，
//! 每个类别先基础目录再按固定顺序的六个密度目录。单次操作
//! 失败只打印并计数，批处理继续。
//!
//! ## 依赖关系
//! - 被 `commands/propagate.rs` 调用
//! - 使用 `config.rs` 的 RunConfig
//! - 使用 `parsers/request.rs` 解析 token
//! - 使用 `utils/output.rs` 打印进度

use crate::config::RunConfig;
use crate::models::{AssetRequest, ResourceCategory};
use crate::parsers::parse_request;
use crate::utils::output;

use std::fs;
use std::io;

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
}

impl BatchResult {
    /// 合并另一份统计
    pub fn merge(&mut self, other: BatchResult) {
        self.success += other.success;
        self.failed += other.failed;
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner<'a> {
    config: &'a RunConfig,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// 按命令行顺序处理全部 token
    pub fn run(&self, tokens: &[String]) -> BatchResult {
        let mut result = BatchResult::default();

        for token in tokens {
            match parse_request(token) {
                Ok(request) => {
                    if self.config.use_drawable {
                        result.merge(self.propagate(ResourceCategory::Drawable, &request));
                    }
                    if self.config.use_mipmap {
                        result.merge(self.propagate(ResourceCategory::Mipmap, &request));
                    }
                }
                Err(e) => {
                    println!();
                    output::print_failure(&format!("{}", e));
                    result.failed += 1;
                }
            }
        }

        result
    }

    /// 在一个资源类别的全部目录上执行请求
    fn propagate(&self, category: ResourceCategory, request: &AssetRequest) -> BatchResult {
        let mut result = BatchResult::default();

        for dir_name in category.directories() {
            match self.transfer(&dir_name, request) {
                Ok(()) => result.success += 1,
                Err(_) => result.failed += 1,
            }
        }

        result
    }

    /// 在单个目录上执行一次复制或移动
    fn transfer(&self, dir_name: &str, request: &AssetRequest) -> io::Result<()> {
        let source_path = self
            .config
            .source_dir
            .join(dir_name)
            .join(&request.source_name);
        let dest_path = self.config.dest_dir.join(dir_name).join(&request.dest_name);

        let verb = if self.config.move_only {
            "Renaming"
        } else {
            "Copying"
        };
        output::print_action(
            verb,
            &format!("{}/{}", dir_name, request.source_name),
            &format!("{}/{}", dir_name, request.dest_name),
        );

        let outcome = if self.config.move_only {
            fs::rename(&source_path, &dest_path)
        } else {
            fs::copy(&source_path, &dest_path).map(|_| ())
        };

        match outcome {
            Ok(()) => {
                output::print_success(if self.config.move_only {
                    "File renamed"
                } else {
                    "File copied"
                });
                Ok(())
            }
            Err(e) => {
                output::print_failure(&format!("{}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn make_config(source: &Path, dest: &Path, move_only: bool) -> RunConfig {
        RunConfig {
            source_dir: source.to_path_buf(),
            dest_dir: dest.to_path_buf(),
            move_only,
            use_drawable: true,
            use_mipmap: false,
        }
    }

    fn make_res_tree(root: &Path, category: ResourceCategory, file_name: Option<&str>) {
        for dir_name in category.directories() {
            let dir = root.join(dir_name);
            fs::create_dir_all(&dir).unwrap();
            if let Some(name) = file_name {
                fs::write(dir.join(name), b"png-bytes").unwrap();
            }
        }
    }

    #[test]
    fn test_copy_propagates_to_all_seven_directories() {
        let source_root = tempdir().unwrap();
        let dest_root = tempdir().unwrap();
        make_res_tree(source_root.path(), ResourceCategory::Drawable, Some("logo.png"));
        make_res_tree(dest_root.path(), ResourceCategory::Drawable, None);

        let config = make_config(source_root.path(), dest_root.path(), false);
        let result = BatchRunner::new(&config).run(&["logo.png".to_string()]);

        assert_eq!(result.success, 7);
        assert_eq!(result.failed, 0);
        for dir_name in ResourceCategory::Drawable.directories() {
            assert!(dest_root.path().join(&dir_name).join("logo.png").exists());
            // 复制模式保留源文件
            assert!(source_root.path().join(&dir_name).join("logo.png").exists());
        }
    }

    #[test]
    fn test_move_renames_in_place() {
        let root = tempdir().unwrap();
        make_res_tree(root.path(), ResourceCategory::Drawable, Some("old.png"));

        let config = make_config(root.path(), root.path(), true);
        let result = BatchRunner::new(&config).run(&["old.png>new.png".to_string()]);

        assert_eq!(result.success, 7);
        for dir_name in ResourceCategory::Drawable.directories() {
            assert!(!root.path().join(&dir_name).join("old.png").exists());
            assert!(root.path().join(&dir_name).join("new.png").exists());
        }
    }

    #[test]
    fn test_missing_source_counts_failures_without_aborting() {
        let source_root = tempdir().unwrap();
        let dest_root = tempdir().unwrap();
        // 只有基础目录有文件，六个密度目录为空
        make_res_tree(source_root.path(), ResourceCategory::Drawable, None);
        make_res_tree(dest_root.path(), ResourceCategory::Drawable, None);
        fs::write(
            source_root.path().join("drawable").join("logo.png"),
            b"png-bytes",
        )
        .unwrap();

        let config = make_config(source_root.path(), dest_root.path(), false);
        let result = BatchRunner::new(&config).run(&["logo.png".to_string()]);

        assert_eq!(result.success, 1);
        assert_eq!(result.failed, 6);
        assert_eq!(result.total(), 7);
    }

    #[test]
    fn test_invalid_token_counts_one_failure_and_skips_operations() {
        let source_root = tempdir().unwrap();
        let dest_root = tempdir().unwrap();
        make_res_tree(source_root.path(), ResourceCategory::Drawable, Some("logo.png"));
        make_res_tree(dest_root.path(), ResourceCategory::Drawable, None);

        let config = make_config(source_root.path(), dest_root.path(), false);
        let result = BatchRunner::new(&config).run(&["icon".to_string()]);

        assert_eq!(result.success, 0);
        assert_eq!(result.failed, 1);
        for dir_name in ResourceCategory::Drawable.directories() {
            assert!(!dest_root.path().join(&dir_name).join("icon").exists());
        }
    }

    #[test]
    fn test_both_categories_run_drawable_first() {
        let source_root = tempdir().unwrap();
        let dest_root = tempdir().unwrap();
        for category in [ResourceCategory::Drawable, ResourceCategory::Mipmap] {
            make_res_tree(source_root.path(), category, Some("logo.png"));
            make_res_tree(dest_root.path(), category, None);
        }

        let config = RunConfig {
            source_dir: source_root.path().to_path_buf(),
            dest_dir: dest_root.path().to_path_buf(),
            move_only: false,
            use_drawable: true,
            use_mipmap: true,
        };
        let result = BatchRunner::new(&config).run(&["logo.png".to_string()]);

        assert_eq!(result.total(), 14);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_merge_accumulates_counts() {
        let mut total = BatchResult::default();
        total.merge(BatchResult {
            success: 3,
            failed: 1,
        });
        total.merge(BatchResult {
            success: 0,
            failed: 2,
        });
        assert_eq!(total.success, 3);
        assert_eq!(total.failed, 3);
        assert_eq!(total.total(), 6);
    }
}
