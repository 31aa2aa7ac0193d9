//! Single-level directory reading with portable node types.
//!
//! This crate lists the immediate children of a directory without a metadata
//! query per child:
//! - `Dirent`, a child's base name plus its `NodeType` bits
//! - `Dirents`, the collection a read returns, sortable by name
//! - `read_entries` / `read_names`, the directory reader
//! - `RawDirSource`, the seam a platform enumeration back-end plugs into

pub mod dirent;
pub mod error;
pub mod node_type;
pub mod options;
pub mod reader;
pub mod source;

// Re-export main types
pub use dirent::{Dirent, Dirents};
pub use error::{DirentError, DirentErrorKind, Result};
pub use node_type::NodeType;
pub use options::{ReadDirOptions, DEFAULT_BATCH_SIZE};
pub use reader::{
    read_entries, read_entries_with, read_names, read_names_with, read_source,
    resolve_directory,
};
pub use source::{RawDirSource, RawEntry, StdDirSource};
