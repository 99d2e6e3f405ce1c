use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::calendar::day_of_year;
use crate::irradiance::irradiance;
use crate::types::{DualAxisAngles, LocalTime, SolarPosition, Site};

pub const DAYS_PER_YEAR: f64 = 365.0;
/// Clock minutes per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Maps any angle in degrees into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Fractional year in radians, centred on local noon of day `doy`.
pub fn gamma(doy: i32, hour: u32) -> f64 {
    2.0 * PI / DAYS_PER_YEAR * (doy as f64 - 1.0 + (hour as f64 - 12.0) / 24.0)
}

/// Solar declination in radians (Spencer, 1971).
pub fn declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Hour angle in radians, in [-π, π). Negative before solar noon.
///
/// `tz_offset` is whole hours from UTC; its standard meridian sits at
/// `15 * tz_offset` degrees.
pub fn hour_angle(
    gamma: f64,
    longitude: f64,
    hour: u32,
    minute: u32,
    second: u32,
    tz_offset: i32,
) -> f64 {
    let eot = equation_of_time(gamma);
    let time_offset = eot + MINUTES_PER_DEGREE * longitude - 60.0 * tz_offset as f64;
    let true_solar_time =
        hour as f64 * 60.0 + minute as f64 + second as f64 / 60.0 + time_offset;
    trace!(eot, time_offset, true_solar_time, "solar time");

    let ha_deg = true_solar_time / MINUTES_PER_DEGREE - 180.0;
    deg_to_rad((ha_deg + 180.0).rem_euclid(360.0) - 180.0)
}

/// Sun elevation above the horizon in degrees.
pub fn elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let sin_el = lat_rad.sin() * declination.sin()
        + lat_rad.cos() * declination.cos() * hour_angle.cos();
    rad_to_deg(sin_el.clamp(-1.0, 1.0).asin())
}

/// Sun azimuth in degrees clockwise from north, in [0, 360).
///
/// The east/west half follows the sign of the hour angle: morning suns
/// land in [0, 180], afternoon suns in [180, 360).
pub fn azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let sin_az = -declination.cos() * hour_angle.sin();
    let cos_az = declination.sin() * lat_rad.cos()
        - declination.cos() * lat_rad.sin() * hour_angle.cos();
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}

pub fn solar_position(site: &Site, time: &LocalTime) -> SolarPosition {
    let doy = day_of_year(time.year, time.month, time.day);
    let g = gamma(doy, time.hour);
    let decl = declination(g);
    let ha = hour_angle(
        g,
        site.longitude,
        time.hour,
        time.minute,
        time.second,
        site.tz_offset,
    );
    let el = elevation(site.latitude, decl, ha);
    let az = azimuth(site.latitude, decl, ha);
    let ghi = irradiance(el);

    debug!(
        %time,
        doy,
        gamma = g,
        declination = rad_to_deg(decl),
        hour_angle = rad_to_deg(ha),
        elevation = el,
        azimuth = az,
        irradiance = ghi,
        "solar position"
    );

    SolarPosition {
        day_of_year: doy,
        gamma: g,
        declination: decl,
        hour_angle: ha,
        elevation: el,
        azimuth: az,
        irradiance: ghi,
    }
}

/// Positions for `date` every `step_minutes` from local midnight.
///
/// The time-of-day fields of `date` are ignored. A zero step yields nothing.
pub fn day_sweep(site: &Site, date: &LocalTime, step_minutes: u32) -> Vec<(LocalTime, SolarPosition)> {
    if step_minutes == 0 {
        return Vec::new();
    }
    (0..24 * 60)
        .step_by(step_minutes as usize)
        .map(|mins| {
            let t = LocalTime {
                hour: mins / 60,
                minute: mins % 60,
                second: 0,
                ..*date
            };
            (t, solar_position(site, &t))
        })
        .collect()
}

/// Rotation of a horizontal north-south axis tracker, degrees; negative faces east.
pub fn single_axis_rotation(pos: &SolarPosition, latitude: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    rad_to_deg(pos.hour_angle.tan().atan2(lat_rad.cos()))
}

/// Panel orientation for a two-axis tracker: tilt from horizontal and the
/// compass direction of the panel's back (opposite the sun).
pub fn dual_axis_angles(pos: &SolarPosition) -> DualAxisAngles {
    DualAxisAngles {
        tilt: pos.zenith(),
        panel_azimuth: normalize_angle(pos.azimuth + 180.0),
    }
}
