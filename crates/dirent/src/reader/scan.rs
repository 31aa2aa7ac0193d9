//! The batch loop shared by every reader entry point.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use crate::dirent::{Dirent, Dirents};
use crate::error::{DirentError, Result};
use crate::node_type::NodeType;
use crate::options::{ReadDirOptions, DEFAULT_BATCH_SIZE};
use crate::source::{RawDirSource, RawEntry};

/// Drains `source` into a `Dirents`, dropping `.` and `..`.
///
/// Any error aborts the scan and discards what was collected so far.
pub(crate) fn scan<S: RawDirSource>(
    dir: &Path,
    mut source: S,
    options: &ReadDirOptions,
) -> Result<Dirents> {
    let batch_size = options.effective_batch_size();
    log::debug!(
        "reading {} (batch size {}, resolve symlinks: {})",
        dir.display(),
        batch_size,
        options.resolve_symlinks
    );

    let mut entries = Dirents::new();
    // Grows with what the source delivers; a huge hint must not preallocate
    let mut batch: Vec<RawEntry> = Vec::with_capacity(batch_size.min(DEFAULT_BATCH_SIZE));
    let mut batches = 0usize;

    loop {
        batch.clear();
        let more = source.next_batch(batch_size, &mut batch).map_err(|err| {
            log::debug!("read of {} failed after {} entries: {}", dir.display(), entries.len(), err);
            DirentError::from_read(dir, err)
        })?;
        batches += 1;
        log::trace!("batch {} from {}: {} records", batches, dir.display(), batch.len());

        for raw in batch.drain(..) {
            if is_dot_entry(&raw.name) {
                continue;
            }
            entries.push(to_dirent(dir, raw, options)?);
        }

        if !more {
            break;
        }
    }

    log::debug!(
        "read {} entries from {} in {} batches",
        entries.len(),
        dir.display(),
        batches
    );
    Ok(entries)
}

#[inline]
fn is_dot_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

fn to_dirent(dir: &Path, raw: RawEntry, options: &ReadDirOptions) -> Result<Dirent> {
    if !is_valid_name(&raw.name) {
        return Err(DirentError::from_read(
            dir,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid entry name {:?}", raw.name),
            ),
        ));
    }

    let mut node_type = raw.node_type;
    if node_type.is_empty() {
        node_type = NodeType::UNKNOWN;
    }
    if options.resolve_symlinks && node_type.is_symlink() {
        node_type |= target_type(&dir.join(&raw.name));
    }

    Ok(Dirent::new(raw.name, node_type))
}

/// A base name: non-empty and free of separators.
///
/// Separators are ASCII, so they can be matched on the encoded bytes
/// without decoding the name.
fn is_valid_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    !bytes.is_empty()
        && !bytes
            .iter()
            .any(|&byte| byte.is_ascii() && std::path::is_separator(char::from(byte)))
}

/// Type bits of a symlink's target, or nothing if the link dangles.
fn target_type(link: &Path) -> NodeType {
    match fs::metadata(link) {
        Ok(metadata) => NodeType::from_file_type(metadata.file_type()),
        Err(err) => {
            log::trace!("symlink {} not resolved: {}", link.display(), err);
            NodeType::empty()
        }
    }
}
