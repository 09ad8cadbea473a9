//! Recursive tree index: every directory under the root, plus the SVG files in them.

use std::path::Path;

use tracing::{debug, info};

use super::collate::sort_names;
use super::output::{emit, Indexed};
use super::{is_svg, IndexError, IndexResult, TreeNode, ROOT_NODE_NAME};
use crate::config::IndexConfig;
use crate::context::ServiceContext;
use crate::ports::{EntryKind, FileSystem};

/// Builds the tree for `config.root` and emits it per `config.mode`.
///
/// # Errors
///
/// Any listing, stat, or write failure aborts the whole run.
pub fn run(ctx: &ServiceContext, config: &IndexConfig) -> IndexResult<Indexed<TreeNode>> {
    let tree = build_tree(ctx.fs.as_ref(), config.root())?;
    info!(root = %config.root().display(), files = tree.file_count(), "tree index built");
    emit(ctx.fs.as_ref(), config, tree)
}

/// Walks `root` into a synthetic `"svg"` directory node with an empty path.
///
/// # Errors
///
/// Returns [`IndexError::ReadDir`] or [`IndexError::Stat`] on the first
/// filesystem failure anywhere in the walk.
pub fn build_tree(fs: &dyn FileSystem, root: &Path) -> IndexResult<TreeNode> {
    Ok(TreeNode::Dir {
        name: ROOT_NODE_NAME.to_string(),
        path: String::new(),
        children: walk(fs, root, "")?,
    })
}

fn walk(fs: &dyn FileSystem, dir: &Path, base: &str) -> IndexResult<Vec<TreeNode>> {
    let mut names = fs.list_dir(dir).map_err(|source| IndexError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    sort_names(&mut names);
    debug!(dir = %dir.display(), entries = names.len(), "walking directory");

    let mut nodes = Vec::with_capacity(names.len());
    for name in names {
        let full_path = dir.join(&name);
        let rel_path = join_relative(base, &name);
        let kind = fs.kind(&full_path).map_err(|source| IndexError::Stat {
            path: full_path.clone(),
            source,
        })?;

        match kind {
            EntryKind::Dir => {
                let children = walk(fs, &full_path, &rel_path)?;
                nodes.push(TreeNode::Dir {
                    name,
                    path: rel_path,
                    children,
                });
            }
            EntryKind::File if is_svg(&name) => {
                debug!(path = %rel_path, "indexed svg");
                nodes.push(TreeNode::File {
                    name,
                    path: rel_path,
                });
            }
            EntryKind::File | EntryKind::Other => {}
        }
    }
    Ok(nodes)
}

/// Joins a relative path with `/`, independent of the host separator.
fn join_relative(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::config::OutputMode;
    use chrono::Utc;
    use serde_json::json;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("icons")).unwrap();
        std::fs::write(dir.path().join("icons/a.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("icons/b.SVG"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "notes").unwrap();
        dir
    }

    #[test]
    fn builds_nested_tree_of_svg_files() {
        let dir = fixture();
        let tree = build_tree(&LiveFileSystem, dir.path()).unwrap();

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "type": "dir", "name": "svg", "path": "", "children": [
                    {"type": "dir", "name": "icons", "path": "icons", "children": [
                        {"type": "file", "name": "a.svg", "path": "icons/a.svg"},
                        {"type": "file", "name": "b.SVG", "path": "icons/b.SVG"}
                    ]},
                    {"type": "file", "name": "logo.svg", "path": "logo.svg"}
                ]
            })
        );
    }

    #[test]
    fn keeps_directories_without_svg_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("empty/deeper")).unwrap();
        std::fs::write(dir.path().join("empty/notes.md"), "").unwrap();

        let tree = build_tree(&LiveFileSystem, dir.path()).unwrap();
        let empty = &tree.children()[0];
        assert_eq!(empty.name(), "empty");
        assert_eq!(empty.children().len(), 1);
        assert_eq!(empty.children()[0].path(), "empty/deeper");
        assert!(empty.children()[0].children().is_empty());
        assert_eq!(tree.file_count(), 0);
    }

    #[test]
    fn siblings_follow_locale_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Beta.svg", "alpha.svg", "_base.svg", "10.svg", "9.svg"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        std::fs::create_dir(dir.path().join("brand")).unwrap();

        let tree = build_tree(&LiveFileSystem, dir.path()).unwrap();
        let names: Vec<&str> = tree.children().iter().map(TreeNode::name).collect();
        assert_eq!(names, ["_base.svg", "10.svg", "9.svg", "alpha.svg", "Beta.svg", "brand"]);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = build_tree(&LiveFileSystem, &dir.path().join("absent"));
        assert!(matches!(result, Err(IndexError::ReadDir { .. })));
    }

    #[test]
    fn rerun_produces_identical_index() {
        let dir = fixture();
        let config = IndexConfig::new(dir.path());
        let ctx = ServiceContext::live();

        run(&ctx, &config).unwrap();
        let first = std::fs::read_to_string(config.index_path()).unwrap();
        run(&ctx, &config).unwrap();
        let second = std::fs::read_to_string(config.index_path()).unwrap();
        assert_eq!(first, second);
    }

    fn fs_call(seq: u64, method: &str, path: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: "fs".into(),
            method: method.into(),
            input: json!({"path": path}),
            output,
        }
    }

    #[test]
    fn tree_from_cassette() {
        // Listing is unsorted on purpose; the walk must sort it.
        let cassette = Cassette {
            name: "tree-gen-test".into(),
            recorded_at: Utc::now(),
            root: "/project/assets/svg".into(),
            interactions: vec![
                fs_call(
                    0,
                    "list_dir",
                    "/project/assets/svg",
                    json!({"ok": ["logo.svg", "icons", "index.json"]}),
                ),
                fs_call(1, "kind", "/project/assets/svg/icons", json!({"ok": "dir"})),
                fs_call(2, "list_dir", "/project/assets/svg/icons", json!({"ok": ["ok.svg"]})),
                fs_call(3, "kind", "/project/assets/svg/icons/ok.svg", json!({"ok": "file"})),
                fs_call(4, "kind", "/project/assets/svg/index.json", json!({"ok": "file"})),
                fs_call(5, "kind", "/project/assets/svg/logo.svg", json!({"ok": "file"})),
                fs_call(6, "write", "/project/assets/svg/index.json", json!({"ok": null})),
            ],
        };

        let ctx = ServiceContext::from_cassette(&cassette);
        let indexed = run(&ctx, &IndexConfig::new("/project/assets/svg")).unwrap();

        let paths: Vec<&str> = indexed.index.children().iter().map(TreeNode::path).collect();
        assert_eq!(paths, ["icons", "logo.svg"]);
        assert_eq!(indexed.index.children()[0].children()[0].path(), "icons/ok.svg");
        assert_eq!(indexed.index.file_count(), 2);
    }

    #[test]
    fn entries_that_are_neither_file_nor_dir_are_dropped() {
        let cassette = Cassette {
            name: "tree-other-kind".into(),
            recorded_at: Utc::now(),
            root: "assets/svg".into(),
            interactions: vec![
                fs_call(0, "list_dir", "assets/svg", json!({"ok": ["pipe.svg", "real.svg"]})),
                fs_call(1, "kind", "assets/svg/pipe.svg", json!({"ok": "other"})),
                fs_call(2, "kind", "assets/svg/real.svg", json!({"ok": "file"})),
            ],
        };

        let ctx = ServiceContext::from_cassette(&cassette);
        let config = IndexConfig::default().with_mode(OutputMode::DryRun);
        let indexed = run(&ctx, &config).unwrap();

        let paths: Vec<&str> = indexed.index.children().iter().map(TreeNode::path).collect();
        assert_eq!(paths, ["real.svg"]);
    }

    #[test]
    fn stat_failure_aborts_walk() {
        let cassette = Cassette {
            name: "tree-stat-error".into(),
            recorded_at: Utc::now(),
            root: "assets/svg".into(),
            interactions: vec![
                fs_call(0, "list_dir", "assets/svg", json!({"ok": ["broken.svg"]})),
                fs_call(1, "kind", "assets/svg/broken.svg", json!({"err": "dangling symlink"})),
            ],
        };

        let ctx = ServiceContext::from_cassette(&cassette);
        let err = run(&ctx, &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("failed to stat assets/svg/broken.svg"));
    }
}
