use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Luach Hebrew calendar and zmanim calculator.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar conversion and halachic times"
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
    /// Convert a civil date to the Hebrew calendar.
    Hebrew(HebrewArgs),
    /// Convert a Hebrew date to the civil calendar.
    Civil(CivilArgs),
    /// Print the zmanim for a date and location.
    Zmanim(ZmanimArgs),
}

/// Arguments for the `hebrew` subcommand.
#[derive(clap::Args)]
pub struct HebrewArgs {
    /// Civil date as YYYY-MM-DD.
    pub date: String,
}

/// Arguments for the `civil` subcommand.
#[derive(clap::Args)]
pub struct CivilArgs {
    /// Hebrew year (anno mundi).
    pub year: i32,

    /// Month code: 1 Tishrei .. 12 Elul, 13 Adar I, 14 Adar II.
    pub month: u8,

    /// Day of the month.
    pub day: u8,
}

/// Arguments for the `zmanim` subcommand.
#[derive(clap::Args)]
pub struct ZmanimArgs {
    /// Path to TOML configuration file [default: luach.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Civil date as YYYY-MM-DD [default: today at the location].
    #[arg(short, long)]
    pub date: Option<String>,

    /// Local wall-clock time as HH:MM used for the issur melacha check
    /// [default: now, or midnight when --date is given].
    #[arg(short, long)]
    pub time: Option<String>,

    /// Override candle lighting offset (minutes before sunset).
    #[arg(long = "candle-offset")]
    pub candle_offset: Option<i64>,

    /// Override havdalah offset (minutes after sunset, 0 for three stars).
    #[arg(long = "havdalah-offset")]
    pub havdalah_offset: Option<i64>,
}
