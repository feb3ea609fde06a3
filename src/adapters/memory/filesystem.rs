//! In-memory filesystem adapter, the substitute implementation for tests.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::{ErrorCode, FsError};
use crate::ports::filesystem::{CopyOptions, FileKind, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
}

/// In-memory filesystem keyed by normalized path strings.
///
/// Backs callers' tests without touching the disk. Parent directories are
/// recorded implicitly when a file is written, and entries come back in
/// sorted order. Symlinks are not modeled, so `status` never answers
/// `Symlink` here.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    nodes: RwLock<BTreeMap<String, Node>>,
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_strictly_under(key: &str, dir: &str) -> bool {
    key != dir && Path::new(key).starts_with(dir)
}

fn not_empty_error(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("directory {} is not empty", path.display()),
    )
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory filesystem pre-populated with text files.
    #[must_use]
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        {
            let mut nodes = fs.write_lock();
            for (path, contents) in files {
                Self::insert_file(&mut nodes, Path::new(path), contents.as_bytes().to_vec());
            }
        }
        fs
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, Node>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, Node>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert_file(nodes: &mut BTreeMap<String, Node>, path: &Path, data: Vec<u8>) {
        let key = normalize(path);
        Self::record_parents(nodes, &key);
        nodes.insert(key, Node::File(data));
    }

    fn record_parents(nodes: &mut BTreeMap<String, Node>, key: &str) {
        for ancestor in Path::new(key).ancestors().skip(1) {
            let ancestor = normalize(ancestor);
            if ancestor.is_empty() || ancestor == "/" {
                break;
            }
            nodes.entry(ancestor).or_insert(Node::Dir);
        }
    }

    fn has_children(nodes: &BTreeMap<String, Node>, key: &str) -> bool {
        nodes.keys().any(|candidate| is_strictly_under(candidate, key))
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_contents(&self, path: &Path) -> Result<String, FsError> {
        let nodes = self.read_lock();
        match nodes.get(&normalize(path)) {
            Some(Node::File(data)) => String::from_utf8(data.clone()).map_err(|e| FsError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            }),
            Some(Node::Dir) => Err(FsError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            }),
            None => Err(FsError::NotFound { path: path.to_path_buf() }),
        }
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, FsError> {
        let contents = self.read_contents(path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), FsError> {
        let mut joined = String::new();
        for line in lines {
            joined.push_str(line);
            joined.push('\n');
        }
        let mut nodes = self.write_lock();
        Self::insert_file(&mut nodes, path, joined.into_bytes());
        Ok(())
    }

    fn write_contents(&self, path: &Path, data: &[u8]) {
        let mut nodes = self.write_lock();
        Self::insert_file(&mut nodes, path, data.to_vec());
    }

    fn get_files_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError> {
        let key = normalize(dir);
        let nodes = self.read_lock();
        match nodes.get(&key) {
            Some(Node::Dir) => Ok(nodes
                .keys()
                .filter(|candidate| is_strictly_under(candidate, &key))
                .map(PathBuf::from)
                .collect()),
            Some(Node::File(_)) => Err(FsError::Io {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            }),
            None => Err(FsError::NotFound { path: dir.to_path_buf() }),
        }
    }

    fn get_files_non_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>, FsError> {
        let entries = self.get_files_recursive(dir)?;
        Ok(entries
            .into_iter()
            .filter(|candidate| candidate.parent() == Some(dir))
            .collect())
    }

    fn rename(&self, old: &Path, new: &Path) -> Result<(), FsError> {
        let old_key = normalize(old);
        let new_key = normalize(new);
        let mut nodes = self.write_lock();

        let Some(node) = nodes.remove(&old_key) else {
            return Err(FsError::NotFound { path: old.to_path_buf() });
        };
        let descendant_keys: Vec<String> = nodes
            .keys()
            .filter(|candidate| is_strictly_under(candidate, &old_key))
            .cloned()
            .collect();

        Self::record_parents(&mut nodes, &new_key);
        for key in descendant_keys {
            if let Some(child) = nodes.remove(&key) {
                let suffix = &key[old_key.len()..];
                nodes.insert(format!("{new_key}{suffix}"), child);
            }
        }
        nodes.insert(new_key, node);
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<bool, FsError> {
        let key = normalize(path);
        let mut nodes = self.write_lock();
        match nodes.get(&key) {
            Some(Node::Dir) if Self::has_children(&nodes, &key) => Err(FsError::Io {
                path: path.to_path_buf(),
                source: not_empty_error(path),
            }),
            Some(_) => {
                nodes.remove(&key);
                Ok(true)
            }
            None => Err(FsError::NotFound { path: path.to_path_buf() }),
        }
    }

    fn remove_quiet(&self, path: &Path, ec: &mut ErrorCode) -> bool {
        ec.clear();
        let key = normalize(path);
        let mut nodes = self.write_lock();
        match nodes.get(&key) {
            Some(Node::Dir) if Self::has_children(&nodes, &key) => {
                ec.assign(not_empty_error(path));
                false
            }
            Some(_) => {
                nodes.remove(&key);
                true
            }
            None => {
                ec.assign(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"));
                false
            }
        }
    }

    fn remove_all(&self, path: &Path, ec: &mut ErrorCode) -> u64 {
        ec.clear();
        let key = normalize(path);
        let mut nodes = self.write_lock();
        if !nodes.contains_key(&key) {
            return 0;
        }
        let doomed: Vec<String> = nodes
            .keys()
            .filter(|candidate| *candidate == &key || is_strictly_under(candidate, &key))
            .cloned()
            .collect();
        let mut removed = 0;
        for key in doomed {
            if nodes.remove(&key).is_some() {
                removed += 1;
            }
        }
        removed
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_lock().contains_key(&normalize(path))
    }

    fn is_directory(&self, path: &Path) -> bool {
        matches!(self.read_lock().get(&normalize(path)), Some(Node::Dir))
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        matches!(self.read_lock().get(&normalize(path)), Some(Node::File(_)))
    }

    fn is_empty(&self, path: &Path) -> bool {
        let key = normalize(path);
        let nodes = self.read_lock();
        match nodes.get(&key) {
            Some(Node::File(data)) => data.is_empty(),
            Some(Node::Dir) => !Self::has_children(&nodes, &key),
            None => false,
        }
    }

    fn create_directory(&self, path: &Path, ec: &mut ErrorCode) -> bool {
        ec.clear();
        let key = normalize(path);
        let mut nodes = self.write_lock();
        match nodes.get(&key) {
            Some(Node::Dir) => false,
            Some(Node::File(_)) => {
                ec.assign(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
                false
            }
            None => {
                Self::record_parents(&mut nodes, &key);
                nodes.insert(key, Node::Dir);
                true
            }
        }
    }

    fn copy(&self, src: &Path, dst: &Path, opts: CopyOptions) -> Result<(), FsError> {
        if self.is_directory(src) {
            let mut ec = ErrorCode::new();
            self.create_directory(dst, &mut ec);
            if opts.recursive {
                for child in self.get_files_non_recursive(src)? {
                    let Some(name) = child.file_name() else { continue };
                    self.copy(&child, &dst.join(name), opts)?;
                }
            }
            return Ok(());
        }

        let mut ec = ErrorCode::new();
        let _ = self.copy_file(src, dst, opts, &mut ec);
        match ec.take() {
            None => Ok(()),
            Some(err) => Err(FsError::from_io(src, err)),
        }
    }

    fn copy_file(&self, src: &Path, dst: &Path, opts: CopyOptions, ec: &mut ErrorCode) -> bool {
        ec.clear();
        let src_key = normalize(src);
        let dst_key = normalize(dst);
        let mut nodes = self.write_lock();

        let data = match nodes.get(&src_key) {
            Some(Node::File(data)) => data.clone(),
            Some(Node::Dir) => {
                ec.assign(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"));
                return false;
            }
            None => {
                ec.assign(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"));
                return false;
            }
        };

        if nodes.contains_key(&dst_key) {
            if opts.skip_existing {
                return false;
            }
            if !opts.overwrite_existing {
                ec.assign(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("destination {} already exists", dst.display()),
                ));
                return false;
            }
        }
        Self::insert_file(&mut nodes, dst, data);
        true
    }

    fn status(&self, path: &Path, ec: &mut ErrorCode) -> FileKind {
        ec.clear();
        match self.read_lock().get(&normalize(path)) {
            Some(Node::File(_)) => FileKind::Regular,
            Some(Node::Dir) => FileKind::Directory,
            None => FileKind::NotFound,
        }
    }
}
