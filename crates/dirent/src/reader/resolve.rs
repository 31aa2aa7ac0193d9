//! Resolution of the directory argument.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DirentError, Result};

/// Follows symlinks in `path` and checks that the result is a directory.
///
/// Returns the canonical path of the directory whose children will be read.
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(path).map_err(|err| {
        log::debug!("cannot resolve {}: {}", path.display(), err);
        DirentError::from_resolve(path, err)
    })?;

    let metadata = fs::metadata(&resolved).map_err(|err| DirentError::from_resolve(path, err))?;
    if !metadata.is_dir() {
        return Err(DirentError::not_a_directory(path));
    }

    if resolved != path {
        log::trace!("{} resolves to {}", path.display(), resolved.display());
    }
    Ok(resolved)
}
