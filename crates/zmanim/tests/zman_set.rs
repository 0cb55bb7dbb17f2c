//! Zman sets for known dates checked against the solar engine by hand.

use approx::assert_abs_diff_eq;
use jiff::civil::{Date, DateTime, date};
use jiff::tz::{self, TimeZone};
use luach_solar::Location;
use luach_zmanim::{Zman, ZmanSet, ZmanimError};

fn jerusalem() -> Location {
    Location::new("Jerusalem", 31.778, 35.235, TimeZone::fixed(tz::offset(2))).unwrap()
}

fn local(set: &ZmanSet, zman: Zman) -> DateTime {
    set.get(zman)
        .unwrap_or_else(|| panic!("{zman} missing"))
        .datetime()
}

fn at(d: Date, h: i8, m: i8, s: i8) -> DateTime {
    d.at(h, m, s, 0)
}

#[test]
fn jerusalem_friday_before_equinox_shabbat() {
    let d = date(2024, 3, 22);
    let set = ZmanSet::compute(d, &jerusalem()).unwrap();

    assert_eq!(set.date(), d);
    assert_eq!(set.len(), Zman::ALL.len());
    assert_abs_diff_eq!(set.gra_hour().unwrap(), 61.0, epsilon = 1e-9);
    assert_abs_diff_eq!(set.mga_hour().unwrap(), 73.0, epsilon = 1e-9);

    let expected = [
        (Zman::FirstLight, at(d, 4, 28, 0)),
        (Zman::Talit, at(d, 4, 52, 0)),
        (Zman::Sunrise, at(d, 5, 40, 0)),
        (Zman::MgaEndShma, at(d, 8, 7, 0)),
        (Zman::GraEndShma, at(d, 8, 43, 0)),
        (Zman::MgaEndTfila, at(d, 9, 20, 0)),
        (Zman::GraEndTfila, at(d, 9, 44, 0)),
        (Zman::Midday, at(d, 11, 46, 0)),
        (Zman::BigMincha, at(d, 12, 16, 30)),
        (Zman::SmallMincha, at(d, 15, 19, 30)),
        (Zman::PlagMincha, at(d, 16, 35, 45)),
        (Zman::Sunset, at(d, 17, 52, 0)),
        (Zman::FirstStars, at(d, 18, 16, 0)),
        (Zman::StarsOut, at(d, 18, 10, 18)),
        (Zman::ThreeStars, at(d, 18, 28, 0)),
        (Zman::Midnight, at(d, 23, 46, 0)),
    ];
    for (zman, want) in expected {
        assert_eq!(local(&set, zman), want, "{zman}");
    }
}

#[test]
fn fractional_hours_round_to_the_second() {
    let d = date(2024, 3, 23);
    let set = ZmanSet::compute(d, &jerusalem()).unwrap();

    assert_abs_diff_eq!(set.gra_hour().unwrap(), 733.0 / 12.0, epsilon = 1e-9);
    assert_abs_diff_eq!(set.mga_hour().unwrap(), 73.25, epsilon = 1e-9);
    assert_eq!(local(&set, Zman::Sunrise), at(d, 5, 39, 0));
    assert_eq!(local(&set, Zman::Midday), at(d, 11, 45, 30));
    assert_eq!(local(&set, Zman::GraEndShma), at(d, 8, 42, 15));
    assert_eq!(local(&set, Zman::MgaEndShma), at(d, 8, 5, 45));
    assert_eq!(local(&set, Zman::PlagMincha), at(d, 16, 35, 39));
    assert_eq!(local(&set, Zman::Midnight), at(d, 23, 45, 30));
}

#[test]
fn ordering_through_the_day() {
    let set = ZmanSet::compute(date(2024, 3, 22), &jerusalem()).unwrap();
    let order = [
        Zman::FirstLight,
        Zman::Talit,
        Zman::Sunrise,
        Zman::MgaEndShma,
        Zman::GraEndShma,
        Zman::GraEndTfila,
        Zman::Midday,
        Zman::BigMincha,
        Zman::SmallMincha,
        Zman::PlagMincha,
        Zman::Sunset,
        Zman::StarsOut,
        Zman::FirstStars,
        Zman::ThreeStars,
        Zman::Midnight,
    ];
    for pair in order.windows(2) {
        assert!(
            set.get(pair[0]).unwrap() < set.get(pair[1]).unwrap(),
            "{} should precede {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn lookup_by_name() {
    let set = ZmanSet::compute(date(2024, 3, 23), &jerusalem()).unwrap();
    assert_eq!(
        set.by_name("motsei_shabbat").unwrap(),
        set.get(Zman::ThreeStars)
    );
    assert_eq!(set.by_name("sunset").unwrap(), set.get(Zman::Sunset));
    assert!(matches!(
        set.by_name("sunsett"),
        Err(ZmanimError::UnknownZman { name }) if name == "sunsett"
    ));
}

#[test]
fn iteration_follows_identifier_order() {
    let set = ZmanSet::compute(date(2024, 3, 22), &jerusalem()).unwrap();
    let names: Vec<Zman> = set.iter().map(|(zman, _)| zman).collect();
    assert_eq!(names, Zman::ALL.to_vec());
}

#[test]
fn polar_day_has_no_zmanim() {
    let tromso = Location::new("Tromso", 70.0, 25.0, TimeZone::UTC).unwrap();
    let set = ZmanSet::compute(date(2024, 6, 21), &tromso).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.get(Zman::Sunrise), None);
    assert_eq!(set.gra_hour(), None);
    assert_eq!(set.mga_hour(), None);
}

#[test]
fn deep_twilight_missing_at_high_latitude_summer() {
    // At 60N in June the sun sets but never gets 16.1 degrees below.
    let helsinki = Location::new("Helsinki", 60.17, 24.94, TimeZone::fixed(tz::offset(3))).unwrap();
    let set = ZmanSet::compute(date(2024, 6, 21), &helsinki).unwrap();
    assert!(set.get(Zman::Sunrise).is_some());
    assert!(set.get(Zman::Sunset).is_some());
    assert!(set.get(Zman::PlagMincha).is_some());
    assert_eq!(set.get(Zman::FirstLight), None);
    assert_eq!(set.get(Zman::MgaEndShma), None);
    assert_eq!(set.get(Zman::MgaEndTfila), None);
    assert_eq!(set.mga_hour(), None);
    assert!(set.gra_hour().is_some());
}

#[test]
fn daylight_saving_offsets_follow_the_instant() {
    // 10 March 2024: New York moves to EDT at 02:00.
    let tz = TimeZone::posix("EST5EDT,M3.2.0,M11.1.0").unwrap();
    let nyc = Location::new("New York", 40.7128, -74.006, tz).unwrap();
    let d = date(2024, 3, 10);
    let set = ZmanSet::compute(d, &nyc).unwrap();
    assert_eq!(local(&set, Zman::Sunrise), at(d, 7, 16, 0));
    assert_eq!(local(&set, Zman::Sunset), at(d, 18, 57, 0));
}

#[test]
fn repeated_computation_is_identical() {
    let loc = jerusalem();
    let a = ZmanSet::compute(date(2024, 3, 22), &loc).unwrap();
    let b = ZmanSet::compute(date(2024, 3, 22), &loc).unwrap();
    assert_eq!(a, b);
}
