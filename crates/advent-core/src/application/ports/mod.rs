//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from external systems.
//! The `advent-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Day;
use crate::error::AdventResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `advent_adapters::filesystem::LocalFilesystem` (production)
/// - `advent_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - File contents are raw bytes: the puzzle input is opaque and is
///   persisted verbatim, and the substitution engine decides for itself
///   which files are text.
/// - Walking is recursive and yields files only; directories are implied.
pub trait Filesystem: Send + Sync {
    /// Recursively copy a directory tree. `dest` must not exist.
    fn copy_dir(&self, src: &Path, dest: &Path) -> AdventResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Every file under `root`, recursively, in stable order.
    fn walk_files(&self, root: &Path) -> AdventResult<Vec<PathBuf>>;

    /// Read a file's raw bytes.
    fn read_file(&self, path: &Path) -> AdventResult<Vec<u8>>;

    /// Write content to a file, replacing any prior content.
    fn write_file(&self, path: &Path, content: &[u8]) -> AdventResult<()>;

    /// Rename a file within the tree.
    fn rename(&self, from: &Path, to: &Path) -> AdventResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> AdventResult<()>;
}

/// Port for the remote puzzle service.
///
/// The contract mirrors the website exactly: two authenticated GETs, no
/// retries, non-success statuses surfaced as `ApplicationError::Http`.
/// The event year and the session credential are fixed at construction.
///
/// Implemented by:
/// - `advent_adapters::AocClient` (production, reqwest)
/// - scripted fakes in service tests
pub trait PuzzleClient: Send + Sync {
    /// GET `/<year>/day/<day>/input` - the raw input payload.
    fn fetch_input(&self, day: Day) -> AdventResult<Vec<u8>>;

    /// GET `/<year>/day/<day>` - the full puzzle page HTML.
    fn fetch_page(&self, day: Day) -> AdventResult<String>;
}

/// Port for locating and converting the description blocks of a page.
///
/// Returns one converted Markdown block per `.day-desc` element, in
/// document order (one per unlocked puzzle part - typically one or two).
/// Zero blocks is a valid result, not an error. Concatenation is the
/// caller's job, so the converter stays ignorant of file layout.
///
/// Implemented by:
/// - `advent_adapters::DayDescConverter` (scraper-based)
pub trait DescriptionConverter: Send + Sync {
    fn convert(&self, page_html: &str) -> AdventResult<Vec<String>>;
}
