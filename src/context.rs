//! Tool context bundling the capability handed to command handlers.

use crate::adapters::live::LiveFileSystem;
use crate::adapters::memory::MemoryFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the filesystem capability passed explicitly to consumers.
///
/// Constructed once at process start and handed down; there is no global
/// instance to reach for, so tests wire the in-memory substitute instead.
pub struct ToolContext {
    /// Filesystem capability for all file I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ToolContext {
    /// Creates a context backed by real disk I/O.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context backed by the given in-memory filesystem.
    #[must_use]
    pub fn in_memory(fs: MemoryFileSystem) -> Self {
        Self { fs: Box::new(fs) }
    }
}
