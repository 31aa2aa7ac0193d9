use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DirentError {
    #[error("Path error: {}: {reason}", path.display())]
    Path {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Permission denied: {}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse error category, for callers that only branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirentErrorKind {
    Path,
    Permission,
    Io,
}

pub type Result<T> = std::result::Result<T, DirentError>;

impl DirentError {
    pub fn kind(&self) -> DirentErrorKind {
        match self {
            Self::Path { .. } => DirentErrorKind::Path,
            Self::Permission { .. } => DirentErrorKind::Permission,
            Self::Io { .. } => DirentErrorKind::Io,
        }
    }

    /// The path the failing operation was given.
    pub fn path(&self) -> &Path {
        match self {
            Self::Path { path, .. } | Self::Permission { path, .. } | Self::Io { path, .. } => {
                path
            }
        }
    }

    /// Builds a path error that has no underlying OS error.
    pub(crate) fn not_a_directory(path: &Path) -> Self {
        Self::Path {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
            source: None,
        }
    }

    /// Classifies an OS error raised while resolving symlinks in `path`.
    ///
    /// Every failure other than denied access is a bad path, including link
    /// loops and dangling links.
    pub(crate) fn from_resolve(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::Permission { path, source },
            _ => Self::Path {
                path,
                reason: "cannot resolve path".to_string(),
                source: Some(source),
            },
        }
    }

    /// Classifies an OS error raised while opening `path`.
    ///
    /// Missing paths and non-directories become `Path`, access failures become
    /// `Permission`, everything else is `Io`.
    pub(crate) fn from_open(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::Path {
                path,
                reason: "no such file or directory".to_string(),
                source: Some(source),
            },
            io::ErrorKind::NotADirectory => Self::Path {
                path,
                reason: "not a directory".to_string(),
                source: Some(source),
            },
            io::ErrorKind::PermissionDenied => Self::Permission { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Classifies an OS error raised after the directory was opened.
    ///
    /// A directory that vanishes mid-scan is a read failure, not a bad path.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::Permission { path, source },
            _ => Self::Io { path, source },
        }
    }
}
