use crate::angles::deg_to_rad;

/// Haurwitz (1945) scale factor, W/m².
pub const HAURWITZ_SCALE: f64 = 1098.0;
/// Haurwitz attenuation coefficient.
pub const HAURWITZ_ATTENUATION: f64 = 0.059;

/// Clear-sky irradiance in W/m² from the Haurwitz model.
///
/// Zero whenever the sun is on or below the horizon, and for NaN input.
pub fn irradiance(elevation_deg: f64) -> f64 {
    if elevation_deg.is_nan() || elevation_deg <= 0.0 {
        return 0.0;
    }
    let cos_zenith = deg_to_rad(elevation_deg.min(90.0)).sin();
    HAURWITZ_SCALE * cos_zenith * (-HAURWITZ_ATTENUATION / cos_zenith).exp()
}
