mod civil_cmd;
mod cli;
mod config;
mod convert;
mod hebrew_cmd;
mod logging;
mod zmanim_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Hebrew(args) => hebrew_cmd::run(args),
        Command::Civil(args) => civil_cmd::run(args),
        Command::Zmanim(args) => zmanim_cmd::run(args),
    }
}
