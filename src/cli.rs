use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;

/// Sun elevation, azimuth and clear-sky irradiance for a site.
#[derive(Parser)]
#[command(
    name = "solar-alt-az",
    version,
    about = "Sun elevation, azimuth and clear-sky irradiance for a site"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a site TOML file (latitude, longitude, tz_offset, observe_dst).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override latitude in degrees, positive north.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Override longitude in degrees, negative west.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Override standard-time UTC offset in hours.
    #[arg(long, allow_hyphen_values = true)]
    pub tz: Option<i32>,

    /// Never apply U.S. daylight saving time.
    #[arg(long = "no-dst")]
    pub no_dst: bool,

    /// Local time as YYYY-MM-DDTHH:MM:SS; defaults to the system clock.
    #[arg(long)]
    pub at: Option<NaiveDateTime>,

    /// Print every daylight sample of the day at this step in minutes.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=720))]
    pub step: Option<u32>,
}
