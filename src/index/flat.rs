//! Flat index: SVG file names directly inside the root, no recursion.

use std::path::Path;

use tracing::debug;

use super::collate::sort_names;
use super::output::{emit, Indexed};
use super::{is_svg, FlatIndex, IndexError, IndexResult};
use crate::config::{IndexConfig, OutputMode};
use crate::context::ServiceContext;
use crate::ports::FileSystem;

/// Ensures the root exists, lists it, and emits the flat index per `config.mode`.
///
/// Only write mode creates a missing root. Dry-run and check modes treat a
/// missing root as an empty listing.
///
/// # Errors
///
/// Directory creation, listing, and write failures are fatal.
pub fn run(ctx: &ServiceContext, config: &IndexConfig) -> IndexResult<Indexed<FlatIndex>> {
    let fs = ctx.fs.as_ref();
    let root = config.root();

    let index = if config.mode == OutputMode::Write {
        fs.create_dir_all(root).map_err(|source| IndexError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;
        build_flat(fs, root)?
    } else if root_exists(fs, root)? {
        build_flat(fs, root)?
    } else {
        debug!(root = %root.display(), "root missing, nothing to list");
        FlatIndex::default()
    };

    emit(fs, config, index)
}

fn root_exists(fs: &dyn FileSystem, root: &Path) -> IndexResult<bool> {
    fs.exists(root).map_err(|source| IndexError::Stat {
        path: root.to_path_buf(),
        source,
    })
}

/// Lists `root` and keeps entries whose name ends in `.svg`, sorted.
///
/// Subdirectories are not inspected; only the name decides.
///
/// # Errors
///
/// Returns [`IndexError::ReadDir`] if the root cannot be listed.
pub fn build_flat(fs: &dyn FileSystem, root: &Path) -> IndexResult<FlatIndex> {
    let names = fs.list_dir(root).map_err(|source| IndexError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files: Vec<String> = names.into_iter().filter(|name| is_svg(name)).collect();
    sort_names(&mut files);
    debug!(root = %root.display(), count = files.len(), "listed svg files");
    Ok(FlatIndex { files })
}
