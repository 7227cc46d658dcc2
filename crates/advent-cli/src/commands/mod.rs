//! Command handlers.
//!
//! Each handler translates CLI arguments into core calls and displays
//! results. No business logic lives here; shared argument resolution
//! (day, year, session, adapter wiring) sits in this module root.

pub mod completions;
pub mod setup;
pub mod update;

use chrono::{Datelike, Local};
use tracing::{debug, warn};

use advent_adapters::{AocClient, DayDescConverter, LocalFilesystem};
use advent_core::{
    application::ScaffoldService,
    domain::{Day, Session, Year},
};

use crate::{config::AppConfig, error::CliResult};

/// Environment variable holding the session cookie.
pub const SESSION_VAR: &str = "AOC_SESSION";

/// Resolve the puzzle day: the explicit argument, or today's calendar day.
///
/// Outside December 1-25 the calendar default is not a valid day; the
/// domain error tells the user to pass one explicitly.
pub fn resolve_day(arg: Option<u8>) -> CliResult<Day> {
    let value = match arg {
        Some(day) => u32::from(day),
        None => Local::now().day(),
    };
    let day = Day::try_from(value).map_err(advent_core::error::AdventError::from)?;
    debug!(day = %day, explicit = arg.is_some(), "day resolved");
    Ok(day)
}

/// Resolve the event year: CLI flag, then config, then the current year.
pub fn resolve_year(arg: Option<u16>, config: &AppConfig) -> CliResult<Year> {
    let value = arg
        .or(config.event.year)
        .unwrap_or_else(|| Local::now().year() as u16);
    let year = Year::new(value).map_err(advent_core::error::AdventError::from)?;
    debug!(year = %year, "year resolved");
    Ok(year)
}

/// Read the session credential from the environment.
///
/// Absence is not an error here: the remote service is the authority on
/// authentication and will answer with a 4xx we surface verbatim.
pub fn resolve_session() -> Session {
    match std::env::var(SESSION_VAR) {
        Ok(token) if !token.is_empty() => Session::new(token),
        _ => {
            warn!("{SESSION_VAR} is not set; the remote service will reject the request");
            Session::default()
        }
    }
}

/// Wire the production adapters into a scaffold service.
pub fn build_service(year: Year, session: Session, config: &AppConfig) -> CliResult<ScaffoldService> {
    let client = AocClient::new(year, session).map_err(crate::error::CliError::Core)?;
    Ok(ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(client),
        Box::new(DayDescConverter::new()),
        config.layout(),
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────
