//! Zman identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ZmanimError;

/// A named halachic time.
///
/// Variants are ordered as they usually fall through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zman {
    /// Dawn, sun 16.1 degrees below the horizon.
    FirstLight,
    /// Earliest tallit and tefillin (misheyakir), 11 degrees below.
    Talit,
    Sunrise,
    /// Latest Shema, Magen Avraham.
    MgaEndShma,
    /// Latest Shema, Vilna Gaon.
    GraEndShma,
    /// Latest morning prayer, Magen Avraham.
    MgaEndTfila,
    /// Latest morning prayer, Vilna Gaon.
    GraEndTfila,
    Midday,
    /// Earliest mincha (mincha gedola).
    BigMincha,
    /// Mincha ketana.
    SmallMincha,
    PlagMincha,
    Sunset,
    /// Sun 6 degrees below the horizon.
    FirstStars,
    /// Sun 18 halachic minutes past sunset.
    StarsOut,
    /// Sun 8.5 degrees below the horizon; end of Shabbat.
    ThreeStars,
    Midnight,
}

impl Zman {
    /// Every zman, in [`Ord`] order.
    pub const ALL: [Zman; 16] = [
        Zman::FirstLight,
        Zman::Talit,
        Zman::Sunrise,
        Zman::MgaEndShma,
        Zman::GraEndShma,
        Zman::MgaEndTfila,
        Zman::GraEndTfila,
        Zman::Midday,
        Zman::BigMincha,
        Zman::SmallMincha,
        Zman::PlagMincha,
        Zman::Sunset,
        Zman::FirstStars,
        Zman::StarsOut,
        Zman::ThreeStars,
        Zman::Midnight,
    ];

    /// Returns the canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Zman::FirstLight => "first_light",
            Zman::Talit => "talit",
            Zman::Sunrise => "sunrise",
            Zman::MgaEndShma => "mga_end_shma",
            Zman::GraEndShma => "gra_end_shma",
            Zman::MgaEndTfila => "mga_end_tfila",
            Zman::GraEndTfila => "gra_end_tfila",
            Zman::Midday => "midday",
            Zman::BigMincha => "big_mincha",
            Zman::SmallMincha => "small_mincha",
            Zman::PlagMincha => "plag_mincha",
            Zman::Sunset => "sunset",
            Zman::FirstStars => "first_stars",
            Zman::StarsOut => "stars_out",
            Zman::ThreeStars => "three_stars",
            Zman::Midnight => "midnight",
        }
    }

    /// Returns an English description.
    pub fn description(self) -> &'static str {
        match self {
            Zman::FirstLight => "Alot HaShachar",
            Zman::Talit => "Misheyakir",
            Zman::Sunrise => "Sunrise",
            Zman::MgaEndShma => "Latest Shema (MGA)",
            Zman::GraEndShma => "Latest Shema (GRA)",
            Zman::MgaEndTfila => "Latest Shacharit (MGA)",
            Zman::GraEndTfila => "Latest Shacharit (GRA)",
            Zman::Midday => "Chatzot",
            Zman::BigMincha => "Mincha Gedola",
            Zman::SmallMincha => "Mincha Ketana",
            Zman::PlagMincha => "Plag HaMincha",
            Zman::Sunset => "Sunset",
            Zman::FirstStars => "First stars",
            Zman::StarsOut => "Tzeit (18 minutes)",
            Zman::ThreeStars => "Tzeit HaKochavim",
            Zman::Midnight => "Chatzot HaLayla",
        }
    }

    /// Looks up a zman by name.
    ///
    /// Accepts the canonical names and `motsei_shabbat` as an alias for
    /// [`Zman::ThreeStars`].
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::UnknownZman`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, ZmanimError> {
        if name == "motsei_shabbat" {
            return Ok(Zman::ThreeStars);
        }
        Self::ALL
            .into_iter()
            .find(|z| z.name() == name)
            .ok_or_else(|| ZmanimError::UnknownZman {
                name: name.to_string(),
            })
    }
}

impl FromStr for Zman {
    type Err = ZmanimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Zman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for zman in Zman::ALL {
            assert_eq!(Zman::from_name(zman.name()).unwrap(), zman);
        }
    }

    #[test]
    fn all_is_sorted() {
        assert!(Zman::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn alias() {
        assert_eq!("motsei_shabbat".parse::<Zman>().unwrap(), Zman::ThreeStars);
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(
            Zman::from_name("__class__"),
            Err(ZmanimError::UnknownZman { name }) if name == "__class__"
        ));
    }
}
