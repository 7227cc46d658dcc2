//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value ranges.  No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "advent",
    bin_name = "advent",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f384} Per-day puzzle project scaffolding",
    long_about = "advent copies the day-zero template into a fresh per-day \
                  project, downloads the puzzle input, and converts the \
                  puzzle description into a Markdown README.",
    after_help = "EXAMPLES:\n\
        \x20 advent setup            # scaffold today's puzzle\n\
        \x20 advent setup 5          # scaffold day 5\n\
        \x20 advent update           # refresh today's README (e.g. after part one)\n\
        \x20 advent setup 1 --year 2020 --force",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a day: template copy, input download, README.
    #[command(
        visible_alias = "s",
        about = "Scaffold a day's project directory",
        after_help = "EXAMPLES:\n\
            \x20 advent setup            # today's calendar day\n\
            \x20 advent setup 12         # an explicit day\n\
            \x20 advent setup 12 --force # recreate an existing directory"
    )]
    Setup(SetupArgs),

    /// Re-download the description only (picks up part two).
    #[command(
        visible_alias = "u",
        about = "Refresh a day's README from the puzzle page",
        after_help = "EXAMPLES:\n\
            \x20 advent update      # today's calendar day\n\
            \x20 advent update 12"
    )]
    Update(UpdateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 advent completions bash > ~/.local/share/bash-completion/completions/advent\n\
            \x20 advent completions zsh  > ~/.zfunc/_advent\n\
            \x20 advent completions fish > ~/.config/fish/completions/advent.fish"
    )]
    Completions(CompletionsArgs),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `advent setup`.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Puzzle day. Defaults to the current calendar day.
    #[arg(
        value_name = "DAY",
        value_parser = clap::value_parser!(u8).range(1..=25),
        help = "Puzzle day (1-25); defaults to today"
    )]
    pub day: Option<u8>,

    /// Event year. Defaults to the configured or current year.
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Event year")]
    pub year: Option<u16>,

    /// Overwrite an existing day directory (destructive).
    #[arg(long = "force", help = "Remove and recreate an existing day directory")]
    pub force: bool,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `advent update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Puzzle day. Defaults to the current calendar day.
    #[arg(
        value_name = "DAY",
        value_parser = clap::value_parser!(u8).range(1..=25),
        help = "Puzzle day (1-25); defaults to today"
    )]
    pub day: Option<u8>,

    /// Event year. Defaults to the configured or current year.
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Event year")]
    pub year: Option<u16>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `advent completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────
