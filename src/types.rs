use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{check_latitude, check_longitude, check_tz_offset, Result, SolarError};

/// Observer location and the UTC offset its clock runs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, negative west.
    pub longitude: f64,
    /// Whole hours from UTC, DST already applied.
    pub tz_offset: i32,
}

impl Site {
    /// Builds a site after range-checking every field.
    pub fn new(latitude: f64, longitude: f64, tz_offset: i32) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        check_tz_offset(tz_offset)?;
        Ok(Self {
            latitude,
            longitude,
            tz_offset,
        })
    }
}

/// Local civil date and time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalTime {
    /// Builds a local time, rejecting impossible calendar dates and clock readings.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(SolarError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(SolarError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            // leap seconds are reported by chrono as second 59 with extra nanos
            second: dt.second(),
        }
    }

    /// Saturates for hand-built values with out-of-range fields.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour.saturating_mul(60).saturating_add(self.minute)
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Sun position for one instant.
///
/// `declination` and `hour_angle` are radians; `elevation` and `azimuth`
/// are degrees, azimuth clockwise from north. `irradiance` is the
/// clear-sky estimate in W/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: i32,
    pub gamma: f64,
    pub declination: f64,
    pub hour_angle: f64,
    pub elevation: f64,
    pub azimuth: f64,
    pub irradiance: f64,
}

impl SolarPosition {
    pub fn zenith(&self) -> f64 {
        90.0 - self.elevation
    }

    pub fn is_daylight(&self) -> bool {
        self.elevation > 0.0
    }
}

impl fmt::Display for SolarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevation: {:.2}°", self.elevation)?;
        writeln!(f, "Azimuth: {:.2}°", self.azimuth)?;
        write!(f, "Irradiance: {:.1} W/m²", self.irradiance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualAxisAngles {
    pub tilt: f64,
    pub panel_azimuth: f64,
}
