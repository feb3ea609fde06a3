//! Filesystem port for file I/O and directory-tree operations.
//!
//! Every operation belongs to one of four failure families, and call sites
//! rely on which family an operation is in:
//!
//! - **raising** — returns `Result<_, FsError>`; failure stops the caller's
//!   logic until inspected.
//! - **soft** — takes an [`ErrorCode`] out-parameter; the slot is cleared on
//!   entry and the OS error deposited on failure, so "it failed and that's
//!   fine" branches need no `Result` plumbing.
//! - **advisory** — plain `bool` queries; a nonexistent path is an answer,
//!   never an error.
//! - **fatal** — [`FileSystem::write_contents`] only; open failure or a
//!   short write aborts the process rather than leaving a partially written
//!   file behind.

use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, FsError};

/// Kind of entry a path resolves to, as reported by [`FileSystem::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A regular file.
    Regular,
    /// A directory.
    Directory,
    /// A symbolic link (links are not followed).
    Symlink,
    /// Some other entry type, or one that could not be determined.
    Other,
    /// The path does not exist.
    NotFound,
}

/// Behavior flags for [`FileSystem::copy`] and [`FileSystem::copy_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Replace an existing destination file.
    pub overwrite_existing: bool,
    /// Keep an existing destination file and report success.
    pub skip_existing: bool,
    /// Copy directory contents transitively.
    pub recursive: bool,
}

impl CopyOptions {
    /// Options that replace an existing destination.
    #[must_use]
    pub fn overwrite() -> Self {
        Self { overwrite_existing: true, ..Self::default() }
    }

    /// Options that copy a directory tree transitively.
    #[must_use]
    pub fn recursive() -> Self {
        Self { recursive: true, ..Self::default() }
    }
}

/// Provides all host filesystem access for the tool.
///
/// Abstracting the filesystem behind one trait lets callers be tested
/// against a substitute implementation; exactly one production adapter
/// backs it with direct OS calls. Implementations hold no state across
/// calls and add no locking of their own — same-path races are governed by
/// whatever atomicity the OS gives each individual syscall.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file.
    ///
    /// # Errors
    ///
    /// [`FsError::NotFound`] if the file cannot be opened,
    /// [`FsError::TooLarge`] if its measured size cannot be represented in
    /// memory, and [`FsError::Io`] for any other open/read failure
    /// (including non-UTF-8 content).
    fn read_contents(&self, path: &Path) -> Result<String, FsError>;

    /// Reads a file as an ordered sequence of lines.
    ///
    /// Line terminators are stripped and no trailing empty line is
    /// fabricated.
    ///
    /// # Errors
    ///
    /// [`FsError::NotFound`] if the file cannot be opened; any mid-stream
    /// failure is reported as [`FsError::Io`].
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, FsError>;

    /// Writes `lines` to a file, creating or truncating it.
    ///
    /// Each line is written followed by a single newline.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Io`] if the file cannot be created or written.
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), FsError>;

    /// Writes `data` to a file, creating or truncating it.
    ///
    /// This is the one must-succeed-or-crash operation: failure to open or
    /// to write every byte aborts the process with a location-tagged fatal
    /// message instead of returning a soft error.
    fn write_contents(&self, path: &Path, data: &[u8]);

    /// Walks from `starting_dir` through successive parents, returning the
    /// first directory (the starting directory included) that contains a
    /// file named `filename`. Returns the empty path if no ancestor up to
    /// the root matches.
    fn find_file_recursively_up(&self, starting_dir: &Path, filename: &str) -> PathBuf {
        let mut current = starting_dir.to_path_buf();
        while !current.as_os_str().is_empty() {
            if self.exists(&current.join(filename)) {
                return current;
            }
            current = current.parent().map_or_else(PathBuf::new, Path::to_path_buf);
        }
        current
    }

    /// Lists every entry under `dir` at every depth, directories included,
    /// in whatever order the OS enumeration yields.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist or any level cannot be
    /// enumerated.
    fn get_files_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError>;

    /// Lists the immediate children of `dir`, in OS enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist or cannot be enumerated.
    fn get_files_non_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError>;

    /// Renames `old` to `new`.
    ///
    /// # Errors
    ///
    /// Propagates the OS rename failure (cross-device moves, platform rules
    /// for an existing destination).
    fn rename(&self, old: &Path, new: &Path) -> Result<(), FsError>;

    /// Removes a file or empty directory. Raising overload.
    ///
    /// Returns whether an entry was removed.
    ///
    /// # Errors
    ///
    /// [`FsError::NotFound`] if the path does not exist — distinct from
    /// "removed nothing" — and [`FsError::Io`] for any other failure.
    fn remove(&self, path: &Path) -> Result<bool, FsError>;

    /// Removes a file or empty directory. Soft overload.
    ///
    /// Returns whether an entry was removed; on failure (a nonexistent path
    /// included) deposits the OS error into `ec` and returns false.
    fn remove_quiet(&self, path: &Path, ec: &mut ErrorCode) -> bool;

    /// Removes `path` and everything under it, returning the number of
    /// entries removed. A nonexistent path removes zero entries with `ec`
    /// left clear; any other failure is deposited into `ec`. Never aborts.
    fn remove_all(&self, path: &Path, ec: &mut ErrorCode) -> u64;

    /// Whether the path exists. Advisory; never an error.
    fn exists(&self, path: &Path) -> bool;

    /// Whether the path is a directory. Advisory; never an error.
    fn is_directory(&self, path: &Path) -> bool;

    /// Whether the path is a regular file. Advisory; never an error.
    fn is_regular_file(&self, path: &Path) -> bool;

    /// Whether the path is an empty file or an empty directory. A
    /// nonexistent path answers false. Advisory; never an error.
    fn is_empty(&self, path: &Path) -> bool;

    /// Creates a directory, returning whether a new one was created.
    ///
    /// An already-existing directory answers false with `ec` left clear;
    /// any other failure is deposited into `ec`.
    fn create_directory(&self, path: &Path, ec: &mut ErrorCode) -> bool;

    /// Copies `src` to `dst` honoring `opts`. Raising overload.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, the destination
    /// cannot be written, or an existing destination is not permitted by
    /// `opts`.
    fn copy(&self, src: &Path, dst: &Path, opts: CopyOptions) -> Result<(), FsError>;

    /// Copies a single file, reporting success as a boolean. Soft overload.
    ///
    /// With `skip_existing` set, an existing destination answers false with
    /// `ec` left clear; any failure is deposited into `ec`.
    fn copy_file(&self, src: &Path, dst: &Path, opts: CopyOptions, ec: &mut ErrorCode) -> bool;

    /// Reports what kind of entry `path` is, without following symlinks.
    ///
    /// A missing path answers [`FileKind::NotFound`] with `ec` left clear;
    /// a failed query answers [`FileKind::Other`] with the error deposited
    /// into `ec`.
    fn status(&self, path: &Path, ec: &mut ErrorCode) -> FileKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Answers `exists` from a fixed set; the upward search needs nothing else.
    struct StaticFs {
        present: HashSet<PathBuf>,
    }

    impl StaticFs {
        fn new<const N: usize>(paths: [&str; N]) -> Self {
            Self { present: paths.into_iter().map(PathBuf::from).collect() }
        }
    }

    impl FileSystem for StaticFs {
        fn read_contents(&self, _: &Path) -> Result<String, FsError> {
            unimplemented!()
        }
        fn read_lines(&self, _: &Path) -> Result<Vec<String>, FsError> {
            unimplemented!()
        }
        fn write_lines(&self, _: &Path, _: &[String]) -> Result<(), FsError> {
            unimplemented!()
        }
        fn write_contents(&self, _: &Path, _: &[u8]) {
            unimplemented!()
        }
        fn get_files_recursive(&self, _: &Path) -> Result<Vec<PathBuf>, FsError> {
            unimplemented!()
        }
        fn get_files_non_recursive(&self, _: &Path) -> Result<Vec<PathBuf>, FsError> {
            unimplemented!()
        }
        fn rename(&self, _: &Path, _: &Path) -> Result<(), FsError> {
            unimplemented!()
        }
        fn remove(&self, _: &Path) -> Result<bool, FsError> {
            unimplemented!()
        }
        fn remove_quiet(&self, _: &Path, _: &mut ErrorCode) -> bool {
            unimplemented!()
        }
        fn remove_all(&self, _: &Path, _: &mut ErrorCode) -> u64 {
            unimplemented!()
        }
        fn exists(&self, path: &Path) -> bool {
            self.present.contains(path)
        }
        fn is_directory(&self, _: &Path) -> bool {
            unimplemented!()
        }
        fn is_regular_file(&self, _: &Path) -> bool {
            unimplemented!()
        }
        fn is_empty(&self, _: &Path) -> bool {
            unimplemented!()
        }
        fn create_directory(&self, _: &Path, _: &mut ErrorCode) -> bool {
            unimplemented!()
        }
        fn copy(&self, _: &Path, _: &Path, _: CopyOptions) -> Result<(), FsError> {
            unimplemented!()
        }
        fn copy_file(&self, _: &Path, _: &Path, _: CopyOptions, _: &mut ErrorCode) -> bool {
            unimplemented!()
        }
        fn status(&self, _: &Path, _: &mut ErrorCode) -> FileKind {
            unimplemented!()
        }
    }

    #[test]
    fn find_up_matches_starting_directory_first() {
        let fs = StaticFs::new(["/repo/tool.toml", "/repo/a/tool.toml"]);
        let found = fs.find_file_recursively_up(Path::new("/repo/a"), "tool.toml");
        assert_eq!(found, PathBuf::from("/repo/a"));
    }

    #[test]
    fn find_up_walks_two_levels_to_an_ancestor() {
        let fs = StaticFs::new(["/repo/tool.toml"]);
        let found = fs.find_file_recursively_up(Path::new("/repo/a/b"), "tool.toml");
        assert_eq!(found, PathBuf::from("/repo"));
    }

    #[test]
    fn find_up_checks_the_root_itself() {
        let fs = StaticFs::new(["/marker"]);
        let found = fs.find_file_recursively_up(Path::new("/repo/a"), "marker");
        assert_eq!(found, PathBuf::from("/"));
    }

    #[test]
    fn find_up_returns_empty_sentinel_on_miss() {
        let fs = StaticFs::new([]);
        let found = fs.find_file_recursively_up(Path::new("/repo/a/b"), "tool.toml");
        assert_eq!(found, PathBuf::new());
    }

    #[test]
    fn find_up_terminates_on_relative_paths() {
        let fs = StaticFs::new([]);
        let found = fs.find_file_recursively_up(Path::new("a/b"), "tool.toml");
        assert_eq!(found, PathBuf::new());
    }

    #[test]
    fn copy_options_constructors_set_single_flags() {
        assert!(CopyOptions::overwrite().overwrite_existing);
        assert!(!CopyOptions::overwrite().recursive);
        assert!(CopyOptions::recursive().recursive);
    }
}
