//! # luach-zmanim
//!
//! Halachic times (zmanim) for a civil date and location, and the Sabbath
//! and festival boundaries built on them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Location + civil::Date"] -->|"sun_times_at_altitude()"| B["SunTimes per angle"]
//!     B -->|"ZmanSet::compute()"| C["ZmanSet"]
//!     D["Zoned moment"] --> E["Zmanim::new()"]
//!     C --> E
//!     F["RestDayClassifier"] --> E
//!     G["ZmanimConfig"] --> E
//!     E --> H["candle lighting / havdalah / issur melacha"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use jiff::civil::date;
//! use jiff::tz::TimeZone;
//! use luach_solar::Location;
//! use luach_zmanim::{ShabbatOnly, Zman, Zmanim, ZmanimConfig};
//!
//! let tz = TimeZone::get("Asia/Jerusalem").unwrap();
//! let location = Location::new("Jerusalem", 31.778, 35.235, tz).unwrap();
//!
//! let friday = date(2024, 3, 22).at(12, 0, 0, 0);
//! let z = Zmanim::from_local(friday, &location, &ShabbatOnly, &ZmanimConfig::default()).unwrap();
//! println!("sunset {}", z.get(Zman::Sunset).unwrap());
//! println!("candles {}", z.candle_lighting().unwrap());
//! assert!(!z.issur_melacha_in_effect());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `zman` | `Zman` identifiers and their canonical names |
//! | `set` | `ZmanSet`, every zman of one date and place |
//! | `classifier` | `RestDayClassifier` seam and `ShabbatOnly` |
//! | `config` | Candle lighting and havdalah offsets |
//! | `zmanim` | `Zmanim` composer and the issur melacha predicate |
//! | `error` | Error types |

mod classifier;
mod config;
mod error;
mod set;
mod zman;
mod zmanim;

pub use classifier::{CalendarDay, RestDayClassifier, ShabbatOnly};
pub use config::ZmanimConfig;
pub use error::ZmanimError;
pub use set::ZmanSet;
pub use zman::Zman;
pub use zmanim::Zmanim;
