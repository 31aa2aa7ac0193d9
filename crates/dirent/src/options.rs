//! Tuning knobs for a directory read.

/// Batch size used when the caller passes `0`.
pub const DEFAULT_BATCH_SIZE: usize = 256;

/// Options for a single directory read.
///
/// None of these change which children are returned. `batch_size` only
/// bounds how many raw entries are pulled from the OS per step, and
/// `resolve_symlinks` only adds type bits to entries already found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadDirOptions {
    /// Raw entries requested per batch. `0` selects `DEFAULT_BATCH_SIZE`.
    pub batch_size: usize,
    /// Stat symlinked children to add their target's type bits.
    pub resolve_symlinks: bool,
}

impl ReadDirOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size hint.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enables per-symlink target resolution.
    ///
    /// This costs one extra metadata query for each symlinked child.
    pub fn with_resolve_symlinks(mut self, resolve: bool) -> Self {
        self.resolve_symlinks = resolve;
        self
    }

    /// The batch size actually used for a read.
    #[inline]
    pub fn effective_batch_size(&self) -> usize {
        if self.batch_size == 0 {
            DEFAULT_BATCH_SIZE
        } else {
            self.batch_size
        }
    }
}
