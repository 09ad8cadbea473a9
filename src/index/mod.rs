//! SVG index model: tree nodes, the flat list, and the errors shared by both indexers.

pub mod collate;
pub mod flat;
pub mod output;
pub mod tree;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ports::PortError;

/// Name of the synthetic root node of a tree index.
pub const ROOT_NODE_NAME: &str = "svg";

/// One node of the recursive tree index.
///
/// Serialized with a leading `"type"` tag: `{"type":"dir","name":..,"path":..,"children":[..]}`
/// or `{"type":"file","name":..,"path":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// A directory, kept even when it holds no SVG files.
    Dir {
        /// Base name of the directory.
        name: String,
        /// `/`-joined path relative to the scan root; empty for the root.
        path: String,
        /// Sorted children.
        children: Vec<TreeNode>,
    },
    /// An SVG file.
    File {
        /// Base name of the file.
        name: String,
        /// `/`-joined path relative to the scan root.
        path: String,
    },
}

impl TreeNode {
    /// Base name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Dir { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Path relative to the scan root.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Dir { path, .. } | Self::File { path, .. } => path,
        }
    }

    /// Children of a directory node; empty for files.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Dir { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// Number of file leaves under (and including) this node.
    #[must_use]
    pub fn file_count(&self) -> usize {
        match self {
            Self::Dir { children, .. } => children.iter().map(TreeNode::file_count).sum(),
            Self::File { .. } => 1,
        }
    }
}

/// Non-recursive list of SVG file names directly inside the scan root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatIndex {
    /// Sorted base names.
    pub files: Vec<String>,
}

/// Errors raised while building or emitting an index. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A directory listing failed.
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying filesystem error.
        source: PortError,
    },
    /// An entry could not be stat'ed.
    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        /// Entry that could not be inspected.
        path: PathBuf,
        /// Underlying filesystem error.
        source: PortError,
    },
    /// The scan root could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        source: PortError,
    },
    /// The index file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination of the index.
        path: PathBuf,
        /// Underlying filesystem error.
        source: PortError,
    },
    /// JSON serialization failed.
    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
    /// `--check` found the index missing or different from a fresh scan.
    #[error("{} is missing or out of date; rerun without --check", .path.display())]
    Stale {
        /// Index file that was compared.
        path: PathBuf,
    },
}

/// Result alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Returns `true` if `name` ends in `.svg`, ignoring ASCII case.
#[must_use]
pub fn is_svg(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".svg")
}
