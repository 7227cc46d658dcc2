//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use advent_core::{
    application::{ApplicationError, ports::Filesystem},
    error::AdventResult,
};

/// In-memory filesystem for testing.
///
/// Stores file bytes in a `BTreeMap` so walks come back in a stable,
/// sorted order like the local adapter's.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating implied parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            add_dirs(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.as_ref().to_vec());
    }

    /// Seed an empty directory (testing helper).
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        add_dirs(&mut inner.directories, &path.into());
    }

    /// Read a file's content back (testing helper).
    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned()
    }

    /// Read a file back as UTF-8 (testing helper).
    pub fn read_string(&self, path: &Path) -> Option<String> {
        self.read(path)
            .map(|bytes| String::from_utf8(bytes).expect("utf-8 file"))
    }

    /// Snapshot of every file path (testing helper).
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

fn add_dirs(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn copy_dir(&self, src: &Path, dest: &Path) -> AdventResult<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.directories.contains(dest) || inner.files.contains_key(dest) {
            return Err(ApplicationError::TargetExists {
                path: dest.to_path_buf(),
            }
            .into());
        }
        if !inner.directories.contains(src) {
            return Err(ApplicationError::TemplateCopy {
                path: src.to_path_buf(),
                reason: "source directory does not exist".into(),
            }
            .into());
        }

        let copies: Vec<(PathBuf, Vec<u8>)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(src))
            .map(|(p, content)| (dest.join(p.strip_prefix(src).unwrap()), content.clone()))
            .collect();
        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(src))
            .map(|d| dest.join(d.strip_prefix(src).unwrap()))
            .collect();

        for dir in dirs {
            add_dirs(&mut inner.directories, &dir);
        }
        for (path, content) in copies {
            inner.files.insert(path, content);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn walk_files(&self, root: &Path) -> AdventResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }

    fn read_file(&self, path: &Path) -> AdventResult<Vec<u8>> {
        let inner = self.inner.read().unwrap();
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> AdventResult<()> {
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            add_dirs(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> AdventResult<()> {
        let mut inner = self.inner.write().unwrap();
        let content = inner.files.remove(from).ok_or_else(|| not_found(from))?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> AdventResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

fn not_found(path: &Path) -> advent_core::error::AdventError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "no such file".into(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
