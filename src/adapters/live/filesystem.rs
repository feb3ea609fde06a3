//! Live filesystem adapter using `std::fs`.

use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::checks;
use crate::error::{ErrorCode, FsError};
use crate::ports::filesystem::{CopyOptions, FileKind, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
///
/// Stateless: every operation is a direct blocking OS call, and any handle
/// opened inside an operation is dropped on every exit path before the
/// operation returns.
pub struct LiveFileSystem;

/// Copies one file honoring the overwrite/skip policy.
///
/// Returns whether a copy actually happened; an existing destination under
/// `skip_existing` is a successful no-op.
fn copy_one(src: &Path, dst: &Path, opts: CopyOptions) -> io::Result<bool> {
    if fs::symlink_metadata(dst).is_ok() {
        if opts.skip_existing {
            return Ok(false);
        }
        if !opts.overwrite_existing {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination {} already exists", dst.display()),
            ));
        }
    }
    fs::copy(src, dst)?;
    Ok(true)
}

/// Depth-first removal. Stops at the first failure, which lands in `ec`.
fn remove_tree(path: &Path, is_dir: bool, removed: &mut u64, ec: &mut ErrorCode) {
    if is_dir {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                ec.assign(err);
                return;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    ec.assign(err);
                    return;
                }
            };
            let child_is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(err) => {
                    ec.assign(err);
                    return;
                }
            };
            remove_tree(&entry.path(), child_is_dir, removed, ec);
            if ec.is_set() {
                return;
            }
        }
        match fs::remove_dir(path) {
            Ok(()) => *removed += 1,
            Err(err) => ec.assign(err),
        }
    } else {
        match fs::remove_file(path) {
            Ok(()) => *removed += 1,
            Err(err) => ec.assign(err),
        }
    }
}

impl FileSystem for LiveFileSystem {
    fn read_contents(&self, path: &Path) -> Result<String, FsError> {
        let mut file = fs::File::open(path).map_err(|e| FsError::from_io(path, e))?;
        let len = file.metadata().map_err(|e| FsError::from_io(path, e))?.len();
        let capacity = usize::try_from(len)
            .map_err(|_| FsError::TooLarge { path: path.to_path_buf(), len })?;

        let mut buf = Vec::with_capacity(capacity);
        file.read_to_end(&mut buf)
            .map_err(|e| FsError::Io { path: path.to_path_buf(), source: e })?;

        String::from_utf8(buf).map_err(|e| FsError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, FsError> {
        let file = fs::File::open(path).map_err(|e| FsError::from_io(path, e))?;
        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            lines.push(line.map_err(|e| FsError::Io { path: path.to_path_buf(), source: e })?);
        }
        Ok(lines)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), FsError> {
        let mut file = fs::File::create(path).map_err(|e| FsError::from_io(path, e))?;
        for line in lines {
            writeln!(file, "{line}")
                .map_err(|e| FsError::Io { path: path.to_path_buf(), source: e })?;
        }
        Ok(())
    }

    fn write_contents(&self, path: &Path, data: &[u8]) {
        log::debug!("write_contents {} ({} bytes)", path.display(), data.len());
        let result = fs::File::create(path).and_then(|mut file| file.write_all(data));
        if let Err(err) = result {
            checks::check_exit(false, &format!("failed to write {}: {err}", path.display()));
        }
    }

    fn get_files_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError> {
        fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                let path = entry.path();
                // Symlinked directories are listed but not descended into.
                if entry.file_type()?.is_dir() {
                    out.push(path.clone());
                    walk(&path, out)?;
                } else {
                    out.push(path);
                }
            }
            Ok(())
        }

        let mut entries = Vec::new();
        walk(dir, &mut entries).map_err(|e| FsError::from_io(dir, e))?;
        Ok(entries)
    }

    fn get_files_non_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))? {
            entries.push(entry.map_err(|e| FsError::from_io(dir, e))?.path());
        }
        Ok(entries)
    }

    fn rename(&self, old: &Path, new: &Path) -> Result<(), FsError> {
        log::debug!("rename {} -> {}", old.display(), new.display());
        fs::rename(old, new).map_err(|e| FsError::from_io(old, e))
    }

    fn remove(&self, path: &Path) -> Result<bool, FsError> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io(path, e))?;
        if meta.is_dir() {
            fs::remove_dir(path).map_err(|e| FsError::from_io(path, e))?;
        } else {
            fs::remove_file(path).map_err(|e| FsError::from_io(path, e))?;
        }
        Ok(true)
    }

    fn remove_quiet(&self, path: &Path, ec: &mut ErrorCode) -> bool {
        ec.clear();
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) => {
                ec.assign(err);
                return false;
            }
        };
        let result = if meta.is_dir() { fs::remove_dir(path) } else { fs::remove_file(path) };
        match result {
            Ok(()) => true,
            Err(err) => {
                ec.assign(err);
                false
            }
        }
    }

    fn remove_all(&self, path: &Path, ec: &mut ErrorCode) -> u64 {
        ec.clear();
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return 0,
            Err(err) => {
                ec.assign(err);
                return 0;
            }
        };
        log::debug!("remove_all {}", path.display());
        let mut removed = 0;
        remove_tree(path, meta.is_dir(), &mut removed, ec);
        removed
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_empty(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_none())
            }
            Ok(meta) => meta.len() == 0,
            Err(_) => false,
        }
    }

    fn create_directory(&self, path: &Path, ec: &mut ErrorCode) -> bool {
        ec.clear();
        match fs::create_dir(path) {
            Ok(()) => true,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => false,
            Err(err) => {
                ec.assign(err);
                false
            }
        }
    }

    fn copy(&self, src: &Path, dst: &Path, opts: CopyOptions) -> Result<(), FsError> {
        log::debug!("copy {} -> {}", src.display(), dst.display());
        if self.is_directory(src) {
            if !self.exists(dst) {
                fs::create_dir(dst).map_err(|e| FsError::from_io(dst, e))?;
            }
            if opts.recursive {
                for entry in fs::read_dir(src).map_err(|e| FsError::from_io(src, e))? {
                    let entry = entry.map_err(|e| FsError::from_io(src, e))?;
                    self.copy(&entry.path(), &dst.join(entry.file_name()), opts)?;
                }
            }
            Ok(())
        } else {
            copy_one(src, dst, opts).map(drop).map_err(|e| FsError::from_io(src, e))
        }
    }

    fn copy_file(&self, src: &Path, dst: &Path, opts: CopyOptions, ec: &mut ErrorCode) -> bool {
        ec.clear();
        match copy_one(src, dst, opts) {
            Ok(copied) => copied,
            Err(err) => {
                ec.assign(err);
                false
            }
        }
    }

    fn status(&self, path: &Path, ec: &mut ErrorCode) -> FileKind {
        ec.clear();
        match fs::symlink_metadata(path) {
            Ok(meta) => {
                let file_type = meta.file_type();
                if file_type.is_file() {
                    FileKind::Regular
                } else if file_type.is_dir() {
                    FileKind::Directory
                } else if file_type.is_symlink() {
                    FileKind::Symlink
                } else {
                    FileKind::Other
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => FileKind::NotFound,
            Err(err) => {
                ec.assign(err);
                FileKind::Other
            }
        }
    }
}
