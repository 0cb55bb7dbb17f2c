use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "luach.toml";

/// Top-level Luach configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Where zmanim are computed.
    #[serde(default)]
    pub location: LocationToml,

    /// Candle lighting and havdalah settings.
    #[serde(default)]
    pub zmanim: ZmanimToml,
}

impl LuachConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `luach.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!("no {DEFAULT_CONFIG_PATH} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// IANA time zone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Metres above sea level.
    #[serde(default = "default_elevation")]
    pub elevation: f64,
    #[serde(default)]
    pub diaspora: bool,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            name: default_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
            elevation: default_elevation(),
            diaspora: false,
        }
    }
}

fn default_name() -> String {
    "Jerusalem".to_string()
}
fn default_latitude() -> f64 {
    31.778
}
fn default_longitude() -> f64 {
    35.235
}
fn default_timezone() -> String {
    "Asia/Jerusalem".to_string()
}
fn default_elevation() -> f64 {
    754.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZmanimToml {
    #[serde(default = "default_candle_lighting_offset")]
    pub candle_lighting_offset: i64,
    #[serde(default)]
    pub havdalah_offset: i64,
}

impl Default for ZmanimToml {
    fn default() -> Self {
        Self {
            candle_lighting_offset: default_candle_lighting_offset(),
            havdalah_offset: 0,
        }
    }
}

fn default_candle_lighting_offset() -> i64 {
    18
}
