//! Implementation of the `advent setup` command.
//!
//! Responsibility: resolve day/year/session, call the core scaffold
//! service, and display results.

use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, SetupArgs},
    commands::{build_service, resolve_day, resolve_session, resolve_year},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `advent setup` command.
#[instrument(skip_all)]
pub fn execute(
    args: SetupArgs,
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

    output.header(&format!("Setup {year} day {}", day.padded()))?;
    info!(day = %day, year = %year, "scaffold started");

    let service = build_service(year, session, &config)?;
    service.scaffold(day, args.force)?;

    let outdir = config.layout().day_dir(day);
    output.success(&format!("Scaffolded {}", outdir.display()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", outdir.display()))?;
    output.print("  cargo test")?;

    Ok(())
}
