//! In-memory mock filesystem for testing collectors without real `/proc`.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory filesystem for testing.
///
/// Clones share the same file table, so a test can keep a handle and
/// rewrite or remove files while a collector running on another thread
/// reads them.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    inner: Arc<Mutex<Entries>>,
}

#[derive(Debug, Default)]
struct Entries {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Set of directories, including every ancestor of a file.
    directories: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries();

        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                entries.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }

        entries.files.insert(path, content.into());
    }

    /// Removes a file. Directories are left in place.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        self.entries().files.remove(path.as_ref());
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, Entries> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.entries().files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let entries = self.entries();
        entries.files.contains_key(path) || entries.directories.contains(path)
    }
}
