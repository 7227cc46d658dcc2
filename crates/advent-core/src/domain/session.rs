//! The session credential for the remote puzzle service.

use std::fmt;

/// Opaque authentication token attached to every remote request.
///
/// Supplied by the environment (`AOC_SESSION`) and passed explicitly into
/// the client constructor so tests can inject a fake. Never persisted.
/// `Debug` is redacted so the token cannot leak into logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the cookie header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// An empty credential. The remote service answers with an auth
    /// failure; we do not pre-validate locally.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_token() {
        let session = Session::new("53cr3t");
        assert_eq!(format!("{session:?}"), "Session(<redacted>)");
    }

    #[test]
    fn default_is_empty() {
        assert!(Session::default().is_empty());
        assert!(!Session::new("x").is_empty());
    }
}
