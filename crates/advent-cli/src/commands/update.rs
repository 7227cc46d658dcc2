//! Implementation of the `advent update` command.
//!
//! The reduced flow: re-download the description for an already-scaffolded
//! day and rewrite its README. Typically run after finishing part one,
//! when the page starts exposing part two.

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, UpdateArgs},
    commands::{build_service, resolve_day, resolve_session, resolve_year},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `advent update` command.
#[instrument(skip_all)]
pub fn execute(
    args: UpdateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let day = resolve_day(args.day)?;
    let year = resolve_year(args.year, &config)?;
    let session = resolve_session();
    if session.is_empty() {
        output.warning("AOC_SESSION is not set; the download will be rejected")?;
    }

    output.header(&format!("Update {year} day {}", day.padded()))?;
    info!(day = %day, year = %year, "description refresh started");

    let service = build_service(year, session, &config)?;
    service.refresh_description(day)?;

    let readme = config.layout().day_dir(day).join("README.md");
    output.success(&format!("Updated {}", readme.display()))?;

    Ok(())
}
