//! Portable file-system node type bits.
//!
//! The bit layout is fixed and identical on every platform, so a `NodeType`
//! read on one machine can be persisted and compared on another. Several bits
//! may be set at once: a symbolic link whose target was resolved carries both
//! `SYMLINK` and the target's type bit.

use std::fmt;
use std::fs;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct NodeType: u32 {
        const FILE         = 0x0000_0001;
        const DIR          = 0x0000_0002;
        const SYMLINK      = 0x0000_0004;
        const BLOCK_DEVICE = 0x0000_0008;
        const CHAR_DEVICE  = 0x0000_0010;
        const FIFO         = 0x0000_0020;
        const SOCKET       = 0x0000_0040;
        /// The OS did not report a type and none was queried.
        const UNKNOWN      = 0x0000_0080;

        const DEVICE = Self::BLOCK_DEVICE.bits() | Self::CHAR_DEVICE.bits();
    }
}

impl NodeType {
    /// Maps a `std::fs::FileType` onto the portable bits.
    ///
    /// Exactly one bit is set in the result; types this platform cannot name
    /// map to `UNKNOWN`.
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            return Self::SYMLINK;
        }
        if file_type.is_dir() {
            return Self::DIR;
        }
        if file_type.is_file() {
            return Self::FILE;
        }
        Self::from_special(file_type)
    }

    #[cfg(unix)]
    fn from_special(file_type: fs::FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_block_device() {
            Self::BLOCK_DEVICE
        } else if file_type.is_char_device() {
            Self::CHAR_DEVICE
        } else if file_type.is_fifo() {
            Self::FIFO
        } else if file_type.is_socket() {
            Self::SOCKET
        } else {
            Self::UNKNOWN
        }
    }

    #[cfg(not(unix))]
    fn from_special(_file_type: fs::FileType) -> Self {
        Self::UNKNOWN
    }

    #[inline]
    pub fn is_dir(self) -> bool {
        self.contains(Self::DIR)
    }

    #[inline]
    pub fn is_file(self) -> bool {
        self.contains(Self::FILE)
    }

    #[inline]
    pub fn is_symlink(self) -> bool {
        self.contains(Self::SYMLINK)
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self.contains(Self::UNKNOWN)
    }

    /// Single `ls`-style character for this type. Symlinks win over the
    /// resolved target bit.
    pub fn type_char(self) -> char {
        if self.is_symlink() {
            'l'
        } else if self.is_dir() {
            'd'
        } else if self.is_file() {
            '-'
        } else if self.contains(Self::BLOCK_DEVICE) {
            'b'
        } else if self.contains(Self::CHAR_DEVICE) {
            'c'
        } else if self.contains(Self::FIFO) {
            'p'
        } else if self.contains(Self::SOCKET) {
            's'
        } else {
            '?'
        }
    }
}

impl From<fs::FileType> for NodeType {
    fn from(file_type: fs::FileType) -> Self {
        Self::from_file_type(file_type)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn maps_regular_file_and_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        File::create(&file).unwrap();

        let file_type = fs::symlink_metadata(&file).unwrap().file_type();
        assert_eq!(NodeType::from(file_type), NodeType::FILE);

        let dir_type = fs::symlink_metadata(temp.path()).unwrap().file_type();
        assert_eq!(NodeType::from(dir_type), NodeType::DIR);
    }

    #[cfg(unix)]
    #[test]
    fn maps_symlink_without_following() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path(), &link).unwrap();

        let file_type = fs::symlink_metadata(&link).unwrap().file_type();
        let node_type = NodeType::from(file_type);
        assert!(node_type.is_symlink());
        assert!(!node_type.is_dir());
    }

    #[test]
    fn bits_are_independent() {
        let node_type = NodeType::SYMLINK | NodeType::DIR;
        assert!(node_type.is_symlink());
        assert!(node_type.is_dir());
        assert!(!node_type.is_file());
        assert_eq!(node_type.type_char(), 'l');
    }

    #[test]
    fn bit_layout_is_stable() {
        assert_eq!(NodeType::FILE.bits(), 0x01);
        assert_eq!(NodeType::DIR.bits(), 0x02);
        assert_eq!(NodeType::SYMLINK.bits(), 0x04);
        assert_eq!(NodeType::UNKNOWN.bits(), 0x80);
        assert_eq!(NodeType::DEVICE, NodeType::BLOCK_DEVICE | NodeType::CHAR_DEVICE);
    }

    #[test]
    fn display_uses_type_char() {
        assert_eq!(NodeType::DIR.to_string(), "d");
        assert_eq!(NodeType::FILE.to_string(), "-");
        assert_eq!(NodeType::UNKNOWN.to_string(), "?");
        assert_eq!(NodeType::empty().to_string(), "?");
    }
}
