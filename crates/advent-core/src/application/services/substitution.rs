//! Text Substitution Engine.
//!
//! Rewrites the template placeholder (`day00`) to the real padded day
//! across a copied tree: file contents first, then file names. Matching is
//! case-insensitive on the fixed prefix + placeholder; the replacement
//! keeps the matched prefix bytes verbatim and substitutes only the
//! two-character suffix, so `Day00` becomes `Day05`, not `day05`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::day::DAY_PREFIX;
use crate::error::AdventResult;

/// Find/replace over a directory tree, driven through the [`Filesystem`]
/// port so it is testable against the in-memory adapter.
#[derive(Debug, Clone)]
pub struct TokenRewriter {
    prefix: String,
    placeholder: String,
}

impl TokenRewriter {
    /// A rewriter for an arbitrary `prefix` + `placeholder` token.
    pub fn new(prefix: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Rewrite every file under `root`: contents of UTF-8 files, then file
    /// names. Files without a match are not rewritten at all. Paths outside
    /// `root` are never visited - the walk is rooted there.
    #[instrument(skip_all, fields(root = %root.display(), to = replacement))]
    pub fn rewrite_tree(
        &self,
        fs: &dyn Filesystem,
        root: &Path,
        replacement: &str,
    ) -> AdventResult<()> {
        for path in fs.walk_files(root)? {
            self.rewrite_contents(fs, &path, replacement)?;
            self.rewrite_name(fs, &path, replacement)?;
        }
        Ok(())
    }

    fn rewrite_contents(
        &self,
        fs: &dyn Filesystem,
        path: &Path,
        replacement: &str,
    ) -> AdventResult<()> {
        let bytes = fs.read_file(path)?;
        // The input payload and other binary files are opaque; only text
        // participates in substitution.
        let Ok(text) = std::str::from_utf8(&bytes) else {
            return Ok(());
        };
        if let Some(rewritten) = self.rewrite_str(text, replacement) {
            debug!(path = %path.display(), "rewriting placeholder in contents");
            fs.write_file(path, rewritten.as_bytes())
                .map_err(|e| substitution_error(path, e))?;
        }
        Ok(())
    }

    fn rewrite_name(&self, fs: &dyn Filesystem, path: &Path, replacement: &str) -> AdventResult<()> {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        if let Some(rewritten) = self.rewrite_str(name, replacement) {
            let target: PathBuf = path.with_file_name(rewritten);
            debug!(from = %path.display(), to = %target.display(), "renaming file");
            fs.rename(path, &target)
                .map_err(|e| substitution_error(path, e))?;
        }
        Ok(())
    }

    /// Replace every occurrence of the token in `input`, or `None` when
    /// nothing matched. ASCII case-insensitive; the matched prefix is
    /// copied through unchanged.
    pub fn rewrite_str(&self, input: &str, replacement: &str) -> Option<String> {
        let needle = format!("{}{}", self.prefix, self.placeholder).to_ascii_lowercase();
        // ASCII lowering is byte-for-byte, so haystack offsets line up with
        // the original input.
        let haystack = input.to_ascii_lowercase();

        let mut out = String::with_capacity(input.len());
        let mut cursor = 0;
        while let Some(found) = haystack[cursor..].find(&needle) {
            let start = cursor + found;
            out.push_str(&input[cursor..start]);
            out.push_str(&input[start..start + self.prefix.len()]);
            out.push_str(replacement);
            cursor = start + needle.len();
        }
        if cursor == 0 {
            return None;
        }
        out.push_str(&input[cursor..]);
        Some(out)
    }
}

impl Default for TokenRewriter {
    /// The template placeholder: `day00`, any casing.
    fn default() -> Self {
        Self::new(DAY_PREFIX, "00")
    }
}

fn substitution_error(path: &Path, source: crate::error::AdventError) -> crate::error::AdventError {
    ApplicationError::Substitution {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
