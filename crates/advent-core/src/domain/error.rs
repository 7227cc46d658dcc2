//! Domain layer errors.
//!
//! These represent business rule violations - values that cannot exist in
//! the event's calendar. Orchestration failures are `ApplicationError` from
//! `crate::application`.

use thiserror::Error;

/// Errors raised by domain value constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Day outside the event calendar.
    #[error("day {value} is outside the event calendar (1-25)")]
    DayOutOfRange { value: u32 },

    /// Year before the first event.
    #[error("year {year} predates the first event ({first})", first = crate::domain::Year::FIRST_EVENT)]
    YearBeforeFirstEvent { year: u16 },
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DayOutOfRange { value } => vec![
                format!("'{value}' is not a valid puzzle day"),
                "Puzzles are published December 1-25".into(),
                "Pass an explicit day: advent setup 5".into(),
            ],
            Self::YearBeforeFirstEvent { year } => vec![
                format!("No event ran in {year}"),
                format!("The first event was {}", crate::domain::Year::FIRST_EVENT),
            ],
        }
    }
}
