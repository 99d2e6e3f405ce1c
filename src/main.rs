mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use solar_alt_az::{compute_solar, write_sweep, LocalTime, SiteConfig};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading site config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(lat) = cli.lat {
        config.latitude = lat;
    }
    if let Some(lon) = cli.lon {
        config.longitude = lon;
    }
    if let Some(tz) = cli.tz {
        config.tz_offset = tz;
    }
    if cli.no_dst {
        config.observe_dst = false;
    }

    let naive = cli
        .at
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let time = LocalTime::from_naive(&naive);
    let site = config.site(&time).context("invalid site")?;
    info!(?site, %time, "computing");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{} at {:.4}, {:.4} (UTC{:+})",
        time, site.latitude, site.longitude, site.tz_offset
    )?;
    match cli.step {
        Some(step) => {
            write_sweep(&mut out, &site, &time, step)?;
        }
        None => compute_solar(&mut out, &site, &time)?,
    }
    Ok(())
}
