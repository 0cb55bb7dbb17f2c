//! Civil command: convert a Hebrew date to the civil calendar.

use anyhow::{Context, Result};
use tracing::info_span;

use luach_calendar::HebrewDate;

use crate::cli::CivilArgs;

/// Print the civil date of a Hebrew date.
pub fn run(args: CivilArgs) -> Result<()> {
    let _cmd = info_span!("civil").entered();

    let hebrew = HebrewDate::from_codes(args.year, args.month, args.day)
        .context("invalid Hebrew date")?;
    let civil = hebrew.to_civil()?;

    println!("{hebrew}");
    println!("  Civil date : {civil} ({:?})", civil.weekday());
    println!("  Julian day : {}", hebrew.to_jdn().get());
    Ok(())
}
