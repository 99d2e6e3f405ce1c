use std::io::{self, Write};

use tracing::info;

use crate::angles::{day_sweep, solar_position};
use crate::types::{LocalTime, SolarPosition, Site};

/// Computes the sun position for `time` at `site` and writes the
/// elevation/azimuth/irradiance report to `out`.
pub fn compute_solar<W: Write>(out: &mut W, site: &Site, time: &LocalTime) -> io::Result<()> {
    let pos = solar_position(site, time);
    info!(
        elevation = pos.elevation,
        azimuth = pos.azimuth,
        irradiance = pos.irradiance,
        "reporting solar position"
    );
    writeln!(out, "{pos}")
}

/// Writes one tab-separated line per sweep sample, daylight samples only.
pub fn write_sweep<W: Write>(
    out: &mut W,
    site: &Site,
    date: &LocalTime,
    step_minutes: u32,
) -> io::Result<usize> {
    let daylight: Vec<(LocalTime, SolarPosition)> = day_sweep(site, date, step_minutes)
        .into_iter()
        .filter(|(_, pos)| pos.is_daylight())
        .collect();

    writeln!(out, "time\televation\tazimuth\tirradiance")?;
    for (t, pos) in &daylight {
        writeln!(
            out,
            "{:02}:{:02}\t{:.2}\t{:.2}\t{:.1}",
            t.hour, t.minute, pos.elevation, pos.azimuth, pos.irradiance
        )?;
    }
    info!(samples = daylight.len(), step_minutes, "wrote daylight sweep");
    Ok(daylight.len())
}
