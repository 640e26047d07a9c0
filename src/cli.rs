use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wareki_era::CivilDate;

/// Japanese era date converter.
#[derive(Parser)]
#[command(
    name = "wareki",
    version,
    about = "Convert Gregorian dates to Japanese era dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert one or more dates.
    Convert(ConvertArgs),
    /// List the era catalog.
    Eras(ErasArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Dates to convert, as YYYY-MM-DD.
    #[arg(required = true)]
    pub dates: Vec<CivilDate>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render the first year of an era as 元年.
    #[arg(long, overrides_with = "no_gannen")]
    pub gannen: bool,

    /// Render the first year of an era as 1年, overriding the config file.
    #[arg(long = "no-gannen", overrides_with = "gannen")]
    pub no_gannen: bool,

    /// Render digits full-width.
    #[arg(long = "full-width", visible_alias = "zenkaku", overrides_with = "no_full_width")]
    pub full_width: bool,

    /// Render digits half-width, overriding the config file.
    #[arg(long = "no-full-width", overrides_with = "full_width")]
    pub no_full_width: bool,

    /// Print one JSON object per date instead of the date text.
    #[arg(long)]
    pub json: bool,
}

impl ConvertArgs {
    /// The `--gannen` / `--no-gannen` choice, `None` when neither was given.
    pub fn gannen_flag(&self) -> Option<bool> {
        flag_pair(self.gannen, self.no_gannen)
    }

    /// The `--full-width` / `--no-full-width` choice, `None` when neither
    /// was given.
    pub fn full_width_flag(&self) -> Option<bool> {
        flag_pair(self.full_width, self.no_full_width)
    }
}

/// Folds a `--x` / `--no-x` pair. Clap keeps only the last of the two.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Arguments for the `eras` subcommand.
#[derive(clap::Args)]
pub struct ErasArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}
