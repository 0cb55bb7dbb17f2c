//! Hebrew command: convert a civil date to the Hebrew calendar.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use luach_calendar::{HebrewYear, jdn_to_hebrew};

use crate::cli::HebrewArgs;
use crate::convert;

/// Print the Hebrew date of a civil date, with its Julian day and year layout.
pub fn run(args: HebrewArgs) -> Result<()> {
    let _cmd = info_span!("hebrew").entered();

    let civil = convert::to_civil(convert::parse_date(&args.date)?)?;
    let jdn = civil.to_jdn();
    let (hebrew, bounds) =
        jdn_to_hebrew(jdn).with_context(|| format!("no Hebrew date for {civil}"))?;
    debug!(%jdn, tishrei1 = %bounds.tishrei1, "converted");
    let year = HebrewYear::new(hebrew.year())?;

    println!("{civil} ({:?})", civil.weekday());
    println!("  Hebrew date : {hebrew}");
    println!("  Julian day  : {}", jdn.get());
    println!(
        "  Year {}   : {} days, {}, type {}, Rosh Hashana on {:?}",
        year.year(),
        year.length(),
        if year.is_leap() { "leap" } else { "common" },
        year.year_type().code(),
        year.new_year_weekday()
    );
    Ok(())
}
