//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire per-day workflow:
//! 1. Copy the template tree to the day's directory
//! 2. Rewrite the placeholder token (contents and file names)
//! 3. Fetch the puzzle input and persist it verbatim
//! 4. Fetch the description, convert it, and persist the README
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//! Each step is a hard dependency on the previous one succeeding; there is
//! no rollback, so a failed fetch leaves the copied tree in place for a
//! manual re-run.

use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DescriptionConverter, Filesystem, PuzzleClient},
        services::TokenRewriter,
    },
    domain::Day,
    error::AdventResult,
};

/// Where the template lives and how day artifacts are named.
///
/// Injectable so the core never hard-codes a working-directory-relative
/// path (tests run against an in-memory tree under any root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Parent of every day directory.
    pub challenges_root: PathBuf,
    /// The "day zero" template tree, copied for each new day.
    pub template_dir: PathBuf,
    /// Filename for the verbatim input payload.
    pub input_filename: String,
    /// Filename for the converted description.
    pub readme_filename: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            challenges_root: PathBuf::from("challenges"),
            template_dir: PathBuf::from("challenges/day00"),
            input_filename: "input.txt".into(),
            readme_filename: "README.md".into(),
        }
    }
}

impl Layout {
    /// Target project directory for a day, e.g. `challenges/day05`.
    pub fn day_dir(&self, day: Day) -> PathBuf {
        self.challenges_root.join(day.dir_name())
    }
}

/// Main scaffolding service.
///
/// Owns the driven ports and the layout; one instance per invocation.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    client: Box<dyn PuzzleClient>,
    converter: Box<dyn DescriptionConverter>,
    layout: Layout,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        client: Box<dyn PuzzleClient>,
        converter: Box<dyn DescriptionConverter>,
        layout: Layout,
    ) -> Self {
        Self {
            filesystem,
            client,
            converter,
            layout,
        }
    }

    /// Scaffold a day's project directory.
    ///
    /// This is the main use case - template copy, token rewrite, input
    /// download, then description download. With `overwrite` the existing
    /// day directory is removed first; otherwise a pre-existing target is
    /// an error.
    #[instrument(skip_all, fields(day = %day, outdir = %self.layout.day_dir(day).display()))]
    pub fn scaffold(&self, day: Day, overwrite: bool) -> AdventResult<()> {
        let outdir = self.layout.day_dir(day);
        info!("Scaffolding day {}", day.padded());

        // 1. Resolve the target directory
        if self.filesystem.exists(&outdir) {
            if !overwrite {
                return Err(ApplicationError::TargetExists { path: outdir }.into());
            }
            warn!(path = %outdir.display(), "removing existing day directory");
            self.filesystem.remove_dir_all(&outdir)?;
        }

        // 2. Copy the template tree
        if !self.filesystem.exists(&self.layout.template_dir) {
            return Err(ApplicationError::TemplateCopy {
                path: self.layout.template_dir.clone(),
                reason: "template directory does not exist".into(),
            }
            .into());
        }
        self.filesystem.copy_dir(&self.layout.template_dir, &outdir)?;

        // 3. Rewrite the placeholder token
        TokenRewriter::default().rewrite_tree(self.filesystem.as_ref(), &outdir, &day.padded())?;
        info!("Template instantiated");

        // 4. Download the puzzle input, persisted verbatim
        let input = self.client.fetch_input(day)?;
        self.filesystem
            .write_file(&outdir.join(&self.layout.input_filename), &input)?;
        info!(bytes = input.len(), "Input saved");

        // 5. Download and convert the description
        self.refresh_description(day)?;

        info!("Scaffold completed successfully");
        Ok(())
    }

    /// Fetch and persist the day's description, replacing any prior README.
    ///
    /// Reduced flow for updating an already-scaffolded day - typically run
    /// again after part one is solved, when the page exposes part two.
    /// Idempotent for identical remote content.
    #[instrument(skip_all, fields(day = %day))]
    pub fn refresh_description(&self, day: Day) -> AdventResult<()> {
        let outdir = self.layout.day_dir(day);

        let page = self.client.fetch_page(day)?;
        let blocks = self.converter.convert(&page)?;
        if blocks.is_empty() {
            // Not an error: a page with no description blocks yields an
            // empty document.
            warn!("no description blocks found on the puzzle page");
        }

        let readme = join_blocks(&blocks);
        self.filesystem
            .write_file(&outdir.join(&self.layout.readme_filename), readme.as_bytes())?;
        info!(parts = blocks.len(), "Description saved");
        Ok(())
    }
}

/// Concatenate converted blocks in document order, separating consecutive
/// blocks with exactly one blank line. Non-empty documents end with a
/// single trailing newline.
fn join_blocks(blocks: &[String]) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let mut doc = blocks.join("\n\n");
    doc.push('\n');
    doc
}

// ── tests ─────────────────────────────────────────────────────────────────────
