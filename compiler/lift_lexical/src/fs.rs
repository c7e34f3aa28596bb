//! File-system collaborator used by lexical modules.
//!
//! Modules never touch `std::fs` directly: they read unit text and enumerate
//! directories through a [`FileSystem`], so tooling and tests can run against
//! [`MemoryFileSystem`] without a disk.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    /// Full path of the entry (the listed directory joined with its name).
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        DirEntry {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        DirEntry {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// Source of unit text and directory listings.
pub trait FileSystem: Send + Sync + fmt::Debug {
    /// Read a whole file as UTF-8.
    ///
    /// Non-UTF-8 contents are an [`io::ErrorKind::InvalidData`] error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the direct entries of a directory, in no particular order.
    ///
    /// Implementations must not list an entry that leads back to an
    /// ancestor directory, or enumeration never terminates.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}

/// The operating system's file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn shared() -> Arc<dyn FileSystem> {
        Arc::new(NativeFileSystem)
    }
}

impl FileSystem for NativeFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            // Linked directories are not listed; a link to an ancestor would recurse.
            if file_type.is_symlink() && path.is_dir() {
                continue;
            }
            entries.push(DirEntry {
                path,
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Node {
    File(Arc<str>),
    Dir,
}

/// In-memory file system.
///
/// Directories exist implicitly as ancestors of inserted files, or
/// explicitly through [`MemoryFileSystem::create_dir`]. Cloning shares the
/// underlying storage.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    nodes: Arc<RwLock<BTreeMap<PathBuf, Node>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system pre-populated with `(path, contents)` pairs.
    pub fn with_files<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        for (path, contents) in files {
            fs.write_file(path, contents.as_ref());
        }
        fs
    }

    /// Create or overwrite a file, creating its ancestor directories.
    pub fn write_file(&self, path: impl Into<PathBuf>, contents: &str) {
        let path = path.into();
        let mut nodes = self.nodes.write();
        insert_ancestors(&mut nodes, &path);
        nodes.insert(path, Node::File(Arc::from(contents)));
    }

    /// Create an empty directory and its ancestors.
    pub fn create_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut nodes = self.nodes.write();
        insert_ancestors(&mut nodes, &path);
        nodes.entry(path).or_insert(Node::Dir);
    }

    /// Remove a file. Returns `false` if no file was stored at `path`.
    pub fn remove_file(&self, path: &Path) -> bool {
        let mut nodes = self.nodes.write();
        if matches!(nodes.get(path), Some(Node::File(_))) {
            nodes.remove(path);
            true
        } else {
            false
        }
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.nodes.read().contains_key(path)
    }
}

fn insert_ancestors(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
    for ancestor in path.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.read().get(path) {
            Some(Node::File(contents)) => Ok(contents.to_string()),
            Some(Node::Dir) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let nodes = self.nodes.read();
        match nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "not a directory",
                ))
            }
            None => return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory")),
        }
        let entries = nodes
            .range::<Path, _>((
                std::ops::Bound::Excluded(path),
                std::ops::Bound::Unbounded,
            ))
            .take_while(|(candidate, _)| candidate.starts_with(path))
            .filter(|(candidate, _)| candidate.parent() == Some(path))
            .map(|(candidate, node)| DirEntry {
                path: candidate.clone(),
                is_dir: matches!(node, Node::Dir),
            })
            .collect();
        Ok(entries)
    }
}

impl fmt::Debug for MemoryFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.nodes.read();
        let files = nodes
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .count();
        f.debug_struct("MemoryFileSystem")
            .field("files", &files)
            .field("dirs", &(nodes.len() - files))
            .finish()
    }
}

#[cfg(test)]
mod tests;
