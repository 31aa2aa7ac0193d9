//! Single-level directory reading.
//!
//! `read_entries` and `read_names` share one scan: the directory argument is
//! resolved through any symlinks, opened once, and drained batch by batch
//! through a `RawDirSource`. Results come back in the order the OS delivered
//! them; sort with `Dirents::sort` when order matters.

mod resolve;
mod scan;


use std::ffi::OsString;
use std::path::Path;

use crate::dirent::Dirents;
use crate::error::{DirentError, Result};
use crate::options::ReadDirOptions;
use crate::source::{RawDirSource, StdDirSource};

pub use resolve::resolve_directory;

/// Reads the immediate children of `path`.
///
/// `max_batch` bounds how many raw entries are pulled per step; `0` picks
/// the default. It never limits the number of entries returned.
///
/// ```no_run
/// let mut children = dirent::read_entries("/tmp", 0)?;
/// children.sort();
/// for child in &children {
///     println!("{} {}", child.node_type(), child.name_lossy());
/// }
/// # Ok::<(), dirent::DirentError>(())
/// ```
pub fn read_entries(path: impl AsRef<Path>, max_batch: usize) -> Result<Dirents> {
    read_entries_with(path, &ReadDirOptions::new().with_batch_size(max_batch))
}

/// Reads the names of the immediate children of `path`.
///
/// Names are returned exactly as the OS stores them, so they can be joined
/// back onto `path` even when they are not valid UTF-8.
///
/// ```no_run
/// let mut names = dirent::read_names("/tmp", 0)?;
/// names.sort();
/// # Ok::<(), dirent::DirentError>(())
/// ```
pub fn read_names(path: impl AsRef<Path>, max_batch: usize) -> Result<Vec<OsString>> {
    read_names_with(path, &ReadDirOptions::new().with_batch_size(max_batch))
}

/// `read_entries` with full options.
pub fn read_entries_with(path: impl AsRef<Path>, options: &ReadDirOptions) -> Result<Dirents> {
    let path = path.as_ref();
    let resolved = resolve_directory(path)?;

    let source = StdDirSource::open(&resolved).map_err(|err| {
        let err = DirentError::from_open(path, err);
        log::debug!("open {} failed: {}", resolved.display(), err);
        err
    })?;

    // The handle in `source` is closed when the scan returns, on every path
    scan::scan(&resolved, source, options).map_err(|err| relabel(err, path))
}

/// `read_names` with full options.
pub fn read_names_with(path: impl AsRef<Path>, options: &ReadDirOptions) -> Result<Vec<OsString>> {
    read_entries_with(path, options).map(Dirents::into_names)
}

/// Runs the scan over a caller-supplied source.
///
/// `dir` names the directory the source was opened on. It is used in errors
/// and, with `resolve_symlinks`, as the base for resolving symlinked children.
pub fn read_source<S: RawDirSource>(
    dir: impl AsRef<Path>,
    source: S,
    options: &ReadDirOptions,
) -> Result<Dirents> {
    scan::scan(dir.as_ref(), source, options)
}

/// Reports errors against the path the caller passed, not its resolution.
fn relabel(err: DirentError, path: &Path) -> DirentError {
    match err {
        DirentError::Path { reason, source, .. } => DirentError::Path {
            path: path.to_path_buf(),
            reason,
            source,
        },
        DirentError::Permission { source, .. } => DirentError::Permission {
            path: path.to_path_buf(),
            source,
        },
        DirentError::Io { source, .. } => DirentError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}
