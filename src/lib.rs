pub mod angles;
pub mod calendar;
pub mod config;
pub mod error;
pub mod irradiance;
pub mod report;
pub mod types;

pub use angles::{
    azimuth, day_sweep, declination, deg_to_rad, dual_axis_angles, elevation, equation_of_time,
    gamma, hour_angle, normalize_angle, rad_to_deg, single_axis_rotation, solar_position,
    MINUTES_PER_DEGREE,
};

pub use calendar::{
    day_of_year, days_in_months, effective_tz_offset, is_dst, leap_year,
    nth_weekday_of_month,
};

pub use config::SiteConfig;
pub use error::{Result, SolarError};
pub use irradiance::irradiance;
pub use report::{compute_solar, write_sweep};
pub use types::{DualAxisAngles, LocalTime, SolarPosition, Site};
