//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use advent_core::{application::ports::Filesystem, error::AdventResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn copy_dir(&self, src: &Path, dest: &Path) -> AdventResult<()> {
        if dest.exists() {
            return Err(advent_core::application::ApplicationError::TargetExists {
                path: dest.to_path_buf(),
            }
            .into());
        }
        debug!(src = %src.display(), dest = %dest.display(), "copying template tree");
        for entry in WalkDir::new(src) {
            let entry = entry.map_err(|e| copy_error(src, &e.to_string()))?;
            let rel = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| copy_error(entry.path(), &e.to_string()))?;
            let target = dest.join(rel);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| copy_error(&target, &e.to_string()))?;
            } else {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| copy_error(parent, &e.to_string()))?;
                }
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| copy_error(&target, &e.to_string()))?;
            }
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn walk_files(&self, root: &Path) -> AdventResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        // sort_by_file_name keeps the walk order stable across platforms.
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| map_io(root, "walk directory", &e.to_string()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> AdventResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> AdventResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::write(path, content).map_err(|e| write_error(path, &e.to_string()))
    }

    fn rename(&self, from: &Path, to: &Path) -> AdventResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename file"))
    }

    fn remove_dir_all(&self, path: &Path) -> AdventResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn copy_error(path: &Path, reason: &str) -> advent_core::error::AdventError {
    advent_core::application::ApplicationError::TemplateCopy {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

fn write_error(path: &Path, reason: &str) -> advent_core::error::AdventError {
    advent_core::application::ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

fn map_io(path: &Path, operation: &str, reason: &str) -> advent_core::error::AdventError {
    advent_core::application::ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {reason}"),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> advent_core::error::AdventError {
    map_io(path, operation, &e.to_string())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_template(root: &Path) {
        std::fs::create_dir_all(root.join("template/src")).unwrap();
        std::fs::write(root.join("template/Cargo.toml"), "name = \"day00\"\n").unwrap();
        std::fs::write(root.join("template/src/main.rs"), "fn main() {}\n").unwrap();
    }

    #[test]
    fn copy_dir_replicates_the_tree() {
        let tmp = tempfile::tempdir().unwrap();
        seed_template(tmp.path());

        let fs = LocalFilesystem::new();
        fs.copy_dir(&tmp.path().join("template"), &tmp.path().join("day05"))
            .unwrap();

        assert!(tmp.path().join("day05/Cargo.toml").is_file());
        assert!(tmp.path().join("day05/src/main.rs").is_file());
        // Source left intact
        assert!(tmp.path().join("template/Cargo.toml").is_file());
    }

    #[test]
    fn copy_dir_refuses_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        seed_template(tmp.path());
        std::fs::create_dir(tmp.path().join("day05")).unwrap();

        let fs = LocalFilesystem::new();
        let err = fs
            .copy_dir(&tmp.path().join("template"), &tmp.path().join("day05"))
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn walk_files_is_recursive_and_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        seed_template(tmp.path());

        let fs = LocalFilesystem::new();
        let files = fs.walk_files(&tmp.path().join("template")).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Cargo.toml"));
        assert!(names.contains(&"main.rs"));
    }

    #[test]
    fn write_file_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("a/b/input.txt");
        fs.write_file(&path, b"1,2,3").unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"1,2,3");
    }

    #[test]
    fn rename_moves_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let from = tmp.path().join("day00.rs");
        std::fs::write(&from, "x").unwrap();
        let to = tmp.path().join("day05.rs");
        fs.rename(&from, &to).unwrap();
        assert!(!from.exists());
        assert!(to.is_file());
    }
}
