//! Port traits defining external boundaries.
//!
//! The indexers only touch the outside world through the filesystem.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{EntryKind, FileSystem, PortError};
