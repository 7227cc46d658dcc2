//! Calendar value types: [`Day`] and [`Year`].
//!
//! The event publishes one puzzle per day from December 1st through the
//! 25th, so a `Day` is always in `1..=25`. Directories and files are keyed
//! by the two-digit zero-padded form (`day05`), which is also the shape the
//! template placeholder takes (`day00`).

use std::fmt;

use crate::domain::DomainError;

/// Prefix shared by the template placeholder and every day directory.
pub const DAY_PREFIX: &str = "day";

/// A single puzzle day, validated to the event calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 25;

    /// Create a day, rejecting anything outside `1..=25`.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::DayOutOfRange {
                value: u32::from(value),
            })
        }
    }

    /// Raw day number, for URL paths.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Two-digit zero-padded form, e.g. `05`.
    ///
    /// Exactly two characters for every valid day; `parse(padded) == day`.
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }

    /// Directory name for this day's project, e.g. `day05`.
    pub fn dir_name(self) -> String {
        format!("{DAY_PREFIX}{}", self.padded())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Day {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| DomainError::DayOutOfRange { value })
            .and_then(Self::new)
    }
}

/// An event year.
///
/// The first event ran in 2015; earlier years have no puzzles to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    pub const FIRST_EVENT: u16 = 2015;

    pub fn new(value: u16) -> Result<Self, DomainError> {
        if value < Self::FIRST_EVENT {
            Err(DomainError::YearBeforeFirstEvent { year: value })
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
