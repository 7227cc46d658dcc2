//! Application layer errors.
//!
//! These errors represent failures in the scaffold pipeline, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.
//!
//! Propagation policy: every error aborts the current flow immediately.
//! There are no retries and no rollback of partially written state - the
//! tool favours visibility over automatic cleanup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while running the scaffold or refresh pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template missing/unreadable, or the copy itself failed.
    #[error("template copy failed at {path}: {reason}")]
    TemplateCopy { path: PathBuf, reason: String },

    /// Destination day directory already exists.
    #[error("day directory already exists at {path}")]
    TargetExists { path: PathBuf },

    /// A matched file could not be rewritten or renamed.
    #[error("substitution failed at {path}: {reason}")]
    Substitution { path: PathBuf, reason: String },

    /// Non-success response from the remote service (auth failures included).
    #[error("remote service answered {status} for {url}")]
    Http { status: u16, url: String },

    /// Connection-level failure with no HTTP status (DNS, TLS, timeout).
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// Malformed HTML prevented text extraction.
    #[error("description conversion failed: {reason}")]
    Conversion { reason: String },

    /// Destination file could not be written.
    #[error("write failed at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Other filesystem operation failed (read, walk, remove).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateCopy { path, .. } => vec![
                format!("Could not copy the template at: {}", path.display()),
                "Run from the repository root, where challenges/day00 lives".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to recreate it (destructive)".into(),
                "Or run 'advent update' to refresh only the description".into(),
            ],
            Self::Substitution { path, .. } => vec![
                format!("Failed to rewrite: {}", path.display()),
                "Check that the copied files are writable".into(),
            ],
            Self::Http { status: 404, .. } => vec![
                "The remote service has no such puzzle (404)".into(),
                "The day may not be unlocked yet - puzzles open at midnight EST".into(),
                "Check the --year value".into(),
            ],
            Self::Http { status, .. } if *status == 400 || *status == 401 || *status == 403 => {
                vec![
                    "The remote service rejected the session credential".into(),
                    "Set AOC_SESSION to the session cookie from a logged-in browser".into(),
                ]
            }
            Self::Http { .. } | Self::Transport { .. } => vec![
                "The remote service could not be reached or answered with an error".into(),
                "Re-run the command; nothing needs to be cleaned up first".into(),
            ],
            Self::Conversion { .. } => vec![
                "The description page did not convert cleanly".into(),
                "Re-run 'advent update' once the page markup settles".into(),
            ],
            Self::WriteFailed { path, .. } | Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// True when the failure came from the network rather than this machine.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Transport { .. })
    }
}
