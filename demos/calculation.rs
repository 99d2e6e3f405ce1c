use std::io;

use chrono::TimeZone;
use chrono_tz::America::Chicago;

use solar_alt_az::{
    compute_solar, dual_axis_angles, effective_tz_offset, rad_to_deg, single_axis_rotation,
    solar_position, LocalTime, Site,
};

fn main() -> io::Result<()> {
    let latitude = 39.8;
    let longitude = -89.6;

    let dt = Chicago
        .with_ymd_and_hms(2026, 6, 21, 12, 0, 0)
        .single()
        .expect("unambiguous local time");
    let time = LocalTime::from_naive(&dt.naive_local());
    let site = Site {
        latitude,
        longitude,
        tz_offset: effective_tz_offset(-6, &time, true),
    };

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        latitude, -longitude
    );
    println!("Date/Time: {} (UTC{:+})", dt, site.tz_offset);
    println!();
    compute_solar(&mut io::stdout(), &site, &time)?;

    let pos = solar_position(&site, &time);
    let da = dual_axis_angles(&pos);
    println!();
    println!("--- Intermediate Values ---");
    println!("Day of year: {}", pos.day_of_year);
    println!("Declination: {:.2}°", rad_to_deg(pos.declination));
    println!("Hour Angle: {:.2}°", rad_to_deg(pos.hour_angle));
    println!();
    println!("--- Tracker Setpoints ---");
    println!(
        "Single-axis rotation: {:.2}°",
        single_axis_rotation(&pos, latitude)
    );
    println!("Dual-axis tilt: {:.2}°", da.tilt);
    println!("Dual-axis panel azimuth: {:.2}°", da.panel_azimuth);
    Ok(())
}
