//! Zmanim command: print the halachic times of a day.

use anyhow::Result;
use jiff::Zoned;
use jiff::civil::Time;
use tracing::{info, info_span};

use luach_zmanim::{ShabbatOnly, Zman, Zmanim};

use crate::cli::ZmanimArgs;
use crate::config::LuachConfig;
use crate::convert;

/// Compute and print every zman plus the Sabbath boundaries.
pub fn run(args: ZmanimArgs) -> Result<()> {
    let _cmd = info_span!("zmanim").entered();

    let config = LuachConfig::load(args.config.as_deref())?;
    let location = convert::build_location(&config.location)?;
    let zmanim_cfg =
        convert::build_zmanim_config(&config.zmanim, args.candle_offset, args.havdalah_offset)?;
    info!(location = location.name(), diaspora = location.diaspora(), "location resolved");

    let now = Zoned::now().with_time_zone(location.time_zone().clone());
    let date = match args.date.as_deref() {
        Some(s) => convert::parse_date(s)?,
        None => now.date(),
    };
    let time = match args.time.as_deref() {
        Some(s) => convert::parse_time(s)?,
        None if args.date.is_some() => Time::midnight(),
        None => now.time(),
    };

    let z = Zmanim::from_local(date.to_datetime(time), &location, &ShabbatOnly, &zmanim_cfg)?;

    println!(
        "{} {} ({})",
        location.name(),
        z.today().civil(),
        z.today().hebrew()
    );
    for zman in Zman::ALL {
        let at = z
            .get(zman)
            .map_or_else(|| "--:--:--".to_string(), |t| t.time().to_string());
        println!("  {:<24} {at}", zman.description());
    }
    if let Some(hours) = z.zmanim().gra_hour() {
        println!("  {:<24} {hours:.2} min", "Halachic hour (GRA)");
    }
    if let Some(hours) = z.zmanim().mga_hour() {
        println!("  {:<24} {hours:.2} min", "Halachic hour (MGA)");
    }
    if let Some(t) = z.candle_lighting() {
        println!("  {:<24} {}", "Candle lighting", t.time());
    }
    if let Some(t) = z.havdalah() {
        println!("  {:<24} {}", "Havdalah", t.time());
    }
    println!(
        "  Issur melacha at {}: {}",
        z.moment().time(),
        if z.issur_melacha_in_effect() { "yes" } else { "no" }
    );
    Ok(())
}
