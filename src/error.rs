//! Error types shared by the filesystem capability.
//!
//! Raising operations return [`FsError`]; soft operations deposit the OS
//! error into a caller-supplied [`ErrorCode`] slot instead. The two families
//! are deliberately distinct — see `ports::filesystem`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reported by the raising family of filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// The file or directory does not exist or could not be opened.
    #[error("not found: {}", path.display())]
    NotFound {
        /// Path the operation was given.
        path: PathBuf,
    },

    /// The file's measured size cannot be represented in the result buffer.
    #[error("file too large: {} ({len} bytes)", path.display())]
    TooLarge {
        /// Path of the oversized file.
        path: PathBuf,
        /// Size reported by the OS.
        len: u64,
    },

    /// Any other OS-level failure, carrying the native error.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path the operation was given.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Wraps an `io::Error` for `path`, folding "not found" into its own
    /// variant so callers can branch on absence without inspecting kinds.
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path: path.to_path_buf() }
        } else {
            Self::Io { path: path.to_path_buf(), source: err }
        }
    }

    /// The platform's raw error code, when the OS supplied one.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Io { source, .. } => source.raw_os_error(),
            Self::NotFound { .. } | Self::TooLarge { .. } => None,
        }
    }
}

/// Caller-supplied error slot for the soft-fail family of operations.
///
/// Soft operations clear the slot on entry and deposit the OS error on
/// failure, so call sites can inspect or ignore the outcome without any
/// control-flow disruption.
#[derive(Debug, Default)]
pub struct ErrorCode(Option<io::Error>);

impl ErrorCode {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Deposits an error, replacing any previous one.
    pub fn assign(&mut self, err: io::Error) {
        self.0 = Some(err);
    }

    /// Whether an error has been deposited since the last clear.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The deposited error, if any.
    #[must_use]
    pub fn get(&self) -> Option<&io::Error> {
        self.0.as_ref()
    }

    /// Removes and returns the deposited error, leaving the slot clear.
    pub fn take(&mut self) -> Option<io::Error> {
        self.0.take()
    }

    /// The platform's raw error code from the deposited error, if any.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        self.0.as_ref().and_then(io::Error::raw_os_error)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(err) => err.fmt(f),
            None => f.write_str("no error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_maps_not_found_to_its_own_variant() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let fs_err = FsError::from_io(Path::new("/tmp/missing"), err);
        assert!(matches!(fs_err, FsError::NotFound { .. }));
    }

    #[test]
    fn from_io_keeps_other_kinds_as_io() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let fs_err = FsError::from_io(Path::new("/tmp/locked"), err);
        assert!(matches!(fs_err, FsError::Io { .. }));
    }

    #[test]
    fn error_display_includes_path() {
        let err = FsError::NotFound { path: PathBuf::from("/a/b") };
        assert!(err.to_string().contains("/a/b"));
    }

    #[test]
    fn error_code_starts_clear() {
        let ec = ErrorCode::new();
        assert!(!ec.is_set());
        assert!(ec.get().is_none());
        assert_eq!(ec.to_string(), "no error");
    }

    #[test]
    fn error_code_assign_and_clear() {
        let mut ec = ErrorCode::new();
        ec.assign(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(ec.is_set());
        assert_eq!(ec.get().unwrap().kind(), io::ErrorKind::NotFound);

        ec.clear();
        assert!(!ec.is_set());
    }

    #[test]
    fn error_code_take_empties_the_slot() {
        let mut ec = ErrorCode::new();
        ec.assign(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));

        let taken = ec.take();
        assert_eq!(taken.unwrap().kind(), io::ErrorKind::PermissionDenied);
        assert!(!ec.is_set());
        assert!(ec.take().is_none());
    }
}
