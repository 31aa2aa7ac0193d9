//! Directory entry values and the name-ordered collection they are returned in.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::node_type::NodeType;

/// One child of a scanned directory: its base name and node type bits.
///
/// The name is kept exactly as the OS returned it, so names that are not
/// valid UTF-8 stay distinct and can be joined back onto the parent path.
/// The type bits are whatever the scan observed; they are never re-queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dirent {
    name: OsString,
    node_type: NodeType,
}

impl Dirent {
    pub fn new(name: impl Into<OsString>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
        }
    }

    /// Base name of the entry, never a path.
    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The name as `&str`, if it is valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Option<&str> {
        self.name.to_str()
    }

    /// The name for display. Invalid UTF-8 is replaced, so two lossy names
    /// may compare equal where the real names do not.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// True iff the `DIR` bit is set. A resolved symlink to a directory
    /// reports true here and from `is_symlink`.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.node_type.is_dir()
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.node_type.is_file()
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.node_type.is_symlink()
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.node_type.is_unknown()
    }

    pub fn into_name(self) -> OsString {
        self.name
    }

    #[inline]
    fn name_bytes(&self) -> &[u8] {
        self.name.as_encoded_bytes()
    }
}

impl Ord for Dirent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name_bytes()
            .cmp(other.name_bytes())
            .then_with(|| self.node_type.bits().cmp(&other.node_type.bits()))
    }
}

impl PartialOrd for Dirent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Entries produced by one directory scan, in discovery order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dirents(Vec<Dirent>);

impl Dirents {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, dirent: Dirent) {
        self.0.push(dirent);
    }

    /// Sorts entries by name, byte-wise.
    pub fn sort(&mut self) {
        self.0.sort_unstable_by(|a, b| a.name_bytes().cmp(b.name_bytes()));
    }

    pub fn is_sorted_by_name(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].name_bytes() <= pair[1].name_bytes())
    }

    /// Looks up an entry by name with a binary search. The collection must be
    /// sorted.
    ///
    /// Debug builds check the ordering first, which makes each lookup O(n)
    /// there.
    pub fn find(&self, name: impl AsRef<OsStr>) -> Option<&Dirent> {
        debug_assert!(self.is_sorted_by_name());
        let name = name.as_ref().as_encoded_bytes();
        self.0
            .binary_search_by(|entry| entry.name_bytes().cmp(name))
            .ok()
            .map(|index| &self.0[index])
    }

    /// Names in the current order.
    pub fn names(&self) -> Vec<OsString> {
        self.0.iter().map(|dirent| dirent.name.clone()).collect()
    }

    pub fn into_names(self) -> Vec<OsString> {
        self.0.into_iter().map(Dirent::into_name).collect()
    }

    pub fn into_vec(self) -> Vec<Dirent> {
        self.0
    }
}

impl Deref for Dirents {
    type Target = [Dirent];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Dirent>> for Dirents {
    fn from(entries: Vec<Dirent>) -> Self {
        Self(entries)
    }
}

impl FromIterator<Dirent> for Dirents {
    fn from_iter<I: IntoIterator<Item = Dirent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Dirents {
    type Item = Dirent;
    type IntoIter = std::vec::IntoIter<Dirent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dirents {
    type Item = &'a Dirent;
    type IntoIter = std::slice::Iter<'a, Dirent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
