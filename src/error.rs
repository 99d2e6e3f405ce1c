//! Error types for the opt-in validation layer.
//!
//! The formula functions never fail; these errors only come out of the
//! validating constructors and configuration loading.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SolarError>;

/// Error type for all fallible operations in the crate.
#[derive(Debug, thiserror::Error)]
pub enum SolarError {
    /// Latitude outside -90..=90 degrees, or not finite.
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The rejected latitude.
        value: f64,
    },

    /// Longitude outside -180..=180 degrees, or not finite.
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The rejected longitude.
        value: f64,
    },

    /// Date that does not exist in the Gregorian calendar.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Clock reading outside 00:00:00..=23:59:59.
    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour component.
        hour: u32,
        /// Minute component.
        minute: u32,
        /// Second component.
        second: u32,
    },

    /// UTC offset outside the -12..=14 hours used by real zones.
    #[error("invalid timezone offset {hours}h (must be between -12 and +14)")]
    InvalidTzOffset {
        /// The rejected offset in hours.
        hours: i32,
    },

    /// Site configuration could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Site configuration file could not be read.
    #[error("failed to read site configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(SolarError::InvalidLatitude { value: latitude });
    }
    Ok(())
}

pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(SolarError::InvalidLongitude { value: longitude });
    }
    Ok(())
}

pub fn check_tz_offset(hours: i32) -> Result<()> {
    if !(-12..=14).contains(&hours) {
        return Err(SolarError::InvalidTzOffset { hours });
    }
    Ok(())
}
