//! Error handling for the Advent CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use advent_core::error::{AdventError, ErrorCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the core pipeline.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] AdventError),

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// An I/O operation failed (terminal writes, mostly).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),
            Self::Config { message } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
            ],
            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Map to an OS exit code (see the table in `main.rs`).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(core_err) => match core_err.category() {
                ErrorCategory::Validation => 2,
                ErrorCategory::NotFound => 3,
                ErrorCategory::Network | ErrorCategory::Internal => 1,
            },
            Self::Config { .. } => 4,
            Self::Io { .. } => 1,
        }
    }

    /// Emit a structured log event for this failure.
    pub fn log(&self) {
        error!(exit_code = self.exit_code(), "{self}");
    }

    /// Plain-text rendering: message plus indented suggestions.
    pub fn format_plain(&self) -> String {
        let mut out = format!("error: {self}\n");
        for suggestion in self.suggestions() {
            out.push_str("  - ");
            out.push_str(&suggestion);
            out.push('\n');
        }
        out
    }

    /// Colored rendering for TTY stderr.
    pub fn format_colored(&self) -> String {
        let mut out = format!("{} {self}\n", "error:".red().bold());
        for suggestion in self.suggestions() {
            out.push_str(&format!("  {} {suggestion}\n", "-".dimmed()));
        }
        out
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
