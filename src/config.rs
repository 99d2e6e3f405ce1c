use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::calendar::effective_tz_offset;
use crate::error::{check_latitude, check_longitude, check_tz_offset, Result};
use crate::types::{LocalTime, Site};

/// Site description as written in a TOML file.
///
/// ```toml
/// latitude = 39.8
/// longitude = -89.6
/// tz_offset = -6
/// observe_dst = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Standard-time offset from UTC in hours.
    pub tz_offset: i32,
    /// Apply the U.S. daylight saving rule. On by default, which assumes a
    /// U.S. site; set it to false elsewhere.
    #[serde(default = "default_true")]
    pub observe_dst: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude: 39.8,
            longitude: -89.6,
            tz_offset: -6,
            observe_dst: true,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded site config");
        Ok(config)
    }

    /// Site whose offset includes DST when it applies at `time`.
    ///
    /// The configured standard offset is range-checked, not the DST-shifted
    /// one, so a valid `tz_offset = 14` may yield an effective offset of 15.
    pub fn site(&self, time: &LocalTime) -> Result<Site> {
        check_latitude(self.latitude)?;
        check_longitude(self.longitude)?;
        check_tz_offset(self.tz_offset)?;
        Ok(Site {
            latitude: self.latitude,
            longitude: self.longitude,
            tz_offset: effective_tz_offset(self.tz_offset, time, self.observe_dst),
        })
    }
}
