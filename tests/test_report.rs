use std::io::{self, Write};

use chrono::NaiveDate;

use solar_alt_az::error::SolarError;
use solar_alt_az::irradiance::{irradiance, HAURWITZ_SCALE};
use solar_alt_az::report::{compute_solar, write_sweep};
use solar_alt_az::types::{LocalTime, Site};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn springfield() -> Site {
    Site::new(39.8, -89.6, -6).unwrap()
}

// ── Irradiance ──

#[test]
fn test_irradiance_zero_below_horizon() {
    for e in [0.0, -0.001, -5.0, -45.0, -90.0, f64::NEG_INFINITY] {
        assert_eq!(irradiance(e), 0.0, "elevation {}", e);
    }
    assert_eq!(irradiance(f64::NAN), 0.0);
}

#[test]
fn test_irradiance_clear_sky_peak() {
    let peak = irradiance(90.0);
    assert!((900.0..=1100.0).contains(&peak), "peak={}", peak);
    assert_approx!(peak, 1035.1, 0.5);
    assert!(peak < HAURWITZ_SCALE);
}

#[test]
fn test_irradiance_monotonic_in_elevation() {
    let mut prev = 0.0;
    for e in 1..=90 {
        let i = irradiance(e as f64);
        assert!(i > prev, "elevation {}: {} <= {}", e, i, prev);
        prev = i;
    }
}

#[test]
fn test_irradiance_known_value() {
    assert_approx!(irradiance(30.0), 487.9, 0.5);
}

// ── compute_solar ──

#[test]
fn test_compute_solar_writes_report() {
    let time = LocalTime::new(2026, 3, 21, 12, 0, 0).unwrap();
    let mut out = Vec::new();
    compute_solar(&mut out, &springfield(), &time).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "{}", text);
    assert!(lines[0].starts_with("Elevation: 50."), "{}", lines[0]);
    assert!(lines[1].starts_with("Azimuth: 177."), "{}", lines[1]);
    assert!(lines[2].starts_with("Irradiance: "), "{}", lines[2]);
    assert!(lines[2].ends_with("W/m²"), "{}", lines[2]);
}

#[test]
fn test_compute_solar_night_reports_zero_irradiance() {
    let time = LocalTime::new(2026, 3, 21, 0, 0, 0).unwrap();
    let mut out = Vec::new();
    compute_solar(&mut out, &springfield(), &time).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Irradiance: 0.0 W/m²"), "{}", text);
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_compute_solar_propagates_sink_errors() {
    let time = LocalTime::new(2026, 3, 21, 12, 0, 0).unwrap();
    let err = compute_solar(&mut BrokenSink, &springfield(), &time).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

// ── write_sweep ──

#[test]
fn test_write_sweep_daylight_rows_only() {
    let date = LocalTime::new(2026, 3, 21, 0, 0, 0).unwrap();
    let mut out = Vec::new();
    let n = write_sweep(&mut out, &springfield(), &date, 30).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "time\televation\tazimuth\tirradiance");
    assert_eq!(lines.len(), n + 1);
    // roughly twelve hours of daylight at the equinox
    assert!((22..=26).contains(&n), "n={}", n);
    assert!(!text.contains("\n00:00\t"));
    assert!(text.contains("\n12:00\t"));
}

#[test]
fn test_write_sweep_zero_step_writes_header_only() {
    let date = LocalTime::new(2026, 3, 21, 0, 0, 0).unwrap();
    let mut out = Vec::new();
    assert_eq!(write_sweep(&mut out, &springfield(), &date, 0).unwrap(), 0);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

// ── Validating constructors ──

#[test]
fn test_site_validation() {
    assert!(Site::new(39.8, -89.6, -6).is_ok());
    assert!(matches!(
        Site::new(91.0, 0.0, 0),
        Err(SolarError::InvalidLatitude { .. })
    ));
    assert!(matches!(
        Site::new(0.0, 181.0, 0),
        Err(SolarError::InvalidLongitude { .. })
    ));
    assert!(matches!(
        Site::new(0.0, 0.0, -13),
        Err(SolarError::InvalidTzOffset { hours: -13 })
    ));
}

#[test]
fn test_local_time_validation() {
    assert!(LocalTime::new(2024, 2, 29, 23, 59, 59).is_ok());
    assert!(matches!(
        LocalTime::new(2025, 2, 29, 12, 0, 0),
        Err(SolarError::InvalidDate { .. })
    ));
    assert!(matches!(
        LocalTime::new(2025, 4, 31, 12, 0, 0),
        Err(SolarError::InvalidDate { .. })
    ));
    assert!(matches!(
        LocalTime::new(2025, 4, 30, 24, 0, 0),
        Err(SolarError::InvalidTime { .. })
    ));
    assert!(matches!(
        LocalTime::new(2025, 4, 30, 12, 60, 0),
        Err(SolarError::InvalidTime { .. })
    ));
}

#[test]
fn test_local_time_from_naive() {
    let naive = NaiveDate::from_ymd_opt(2025, 6, 21)
        .unwrap()
        .and_hms_opt(13, 4, 5)
        .unwrap();
    let t = LocalTime::from_naive(&naive);
    assert_eq!(t, LocalTime::new(2025, 6, 21, 13, 4, 5).unwrap());
    assert_eq!(t.minutes_since_midnight(), 13 * 60 + 4);
    assert_eq!(t.to_string(), "2025-06-21 13:04:05");
}

#[test]
fn test_minutes_since_midnight_saturates_on_hand_built_values() {
    let t = LocalTime {
        year: 2025,
        month: 1,
        day: 1,
        hour: u32::MAX,
        minute: 5,
        second: 0,
    };
    assert_eq!(t.minutes_since_midnight(), u32::MAX);
}
