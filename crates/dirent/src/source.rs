//! Raw directory enumeration.
//!
//! The reader never talks to the OS directly. It pulls `(name, type)` pairs
//! through `RawDirSource`, so a platform back-end only has to fill batches.
//! `StdDirSource` is the default back-end built on `std::fs::ReadDir`, which
//! takes the type from the OS directory record where one is provided.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::node_type::NodeType;

/// One raw record from the OS, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub node_type: NodeType,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
        }
    }
}

/// A handle on an open directory that yields raw records in batches.
pub trait RawDirSource {
    /// Appends at most `max` records to `out`.
    ///
    /// Returns `Ok(true)` if more records may remain and `Ok(false)` once the
    /// directory is exhausted. An error ends the scan. A `max` of zero is
    /// treated as one, so a loop on `Ok(true)` always makes progress.
    fn next_batch(&mut self, max: usize, out: &mut Vec<RawEntry>) -> io::Result<bool>;
}

impl<S: RawDirSource + ?Sized> RawDirSource for &mut S {
    fn next_batch(&mut self, max: usize, out: &mut Vec<RawEntry>) -> io::Result<bool> {
        (**self).next_batch(max, out)
    }
}

/// `RawDirSource` over `std::fs::ReadDir`. The directory handle is closed
/// when this value is dropped.
#[derive(Debug)]
pub struct StdDirSource {
    inner: fs::ReadDir,
}

impl StdDirSource {
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            inner: fs::read_dir(path)?,
        })
    }
}

impl RawDirSource for StdDirSource {
    fn next_batch(&mut self, max: usize, out: &mut Vec<RawEntry>) -> io::Result<bool> {
        for _ in 0..max.max(1) {
            let Some(entry) = self.inner.next() else {
                return Ok(false);
            };
            let entry = entry?;
            // Uses the record's type where the OS supplies one
            let node_type = match entry.file_type() {
                Ok(file_type) => NodeType::from_file_type(file_type),
                Err(err) if err.kind() == io::ErrorKind::NotFound => NodeType::UNKNOWN,
                Err(err) => return Err(err),
            };
            out.push(RawEntry::new(entry.file_name(), node_type));
        }
        Ok(true)
    }
}
