//! Unified error handling for Advent Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors so callers get a single interface to handle.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Advent Core operations.
#[derive(Debug, Error, Clone)]
pub enum AdventError {
    /// Errors from the domain layer (invalid days/years).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl AdventError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => match e {
                ApplicationError::Http { status: 404, .. } => ErrorCategory::NotFound,
                ApplicationError::TemplateCopy { .. } => ErrorCategory::NotFound,
                ApplicationError::TargetExists { .. } => ErrorCategory::Validation,
                ApplicationError::Http { .. } | ApplicationError::Transport { .. } => {
                    ErrorCategory::Network
                }
                _ => ErrorCategory::Internal,
            },
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Network,
    Internal,
}

/// Convenient result type alias.
pub type AdventResult<T> = Result<T, AdventError>;

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_404_categorised_not_found() {
        let err = AdventError::from(ApplicationError::Http {
            status: 404,
            url: "https://adventofcode.com/2021/day/5/input".into(),
        });
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn domain_errors_are_validation() {
        let err = AdventError::from(DomainError::DayOutOfRange { value: 26 });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
