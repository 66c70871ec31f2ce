use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Jan 1
pub const DEFAULT_DAY: u32 = 1;

const MAX_DECLINATION_DEG: f64 = -23.45;
const DAYS_IN_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq)]
pub enum SolarError {
    InvalidLatitude(f64),
}

impl fmt::Display for SolarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarError::InvalidLatitude(lat) => {
                write!(f, "latitude must be between -90 and 90, got {}", lat)
            }
        }
    }
}

impl std::error::Error for SolarError {}

/// Sun position at solar noon, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoonElevation {
    pub elevation_deg: f64,
    pub declination_deg: f64,
}

/// Solar elevation and declination at solar noon.
///
/// # Arguments
/// * `latitude` - Latitude in decimal degrees (-90 to +90)
/// * `day` - Day of year, 1 = Jan 1
///
/// The elevation is `90 - latitude + declination` and is not folded back
/// below 90 degrees when the sun passes the zenith.
pub fn high_noon(latitude: f64, day: u32) -> Result<NoonElevation, SolarError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(SolarError::InvalidLatitude(latitude));
    }

    let lat = latitude.to_radians();

    // Solar declination
    let delta = MAX_DECLINATION_DEG.to_radians()
        * ((360.0_f64.to_radians() / DAYS_IN_YEAR) * (day as f64 + 10.0)).cos();

    // Noon elevation
    let elev = 180.0_f64.to_radians() - (90.0_f64.to_radians() + lat - delta);

    Ok(NoonElevation {
        elevation_deg: elev.to_degrees(),
        declination_deg: delta.to_degrees(),
    })
}

pub fn high_noon_series(latitude: f64, days: &[u32]) -> Result<Vec<NoonElevation>, SolarError> {
    days.iter().map(|&day| high_noon(latitude, day)).collect()
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Clear-sky irradiance reaching the surface at noon, scaled by the sine of the
/// solar elevation. Zero when the sun stays below the horizon.
pub fn noon_surface_irradiance(peak: f64, elevation_deg: f64) -> f64 {
    peak * elevation_deg.to_radians().sin().max(0.0)
}
