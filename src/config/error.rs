use crate::config::time_step::TimeStepParseError;
use crate::depth_grid::DepthGridError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    DateOrder,
    TimeStep(TimeStepParseError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Latitude(f64),
    Extinction(f64),
    CriticalIrradiance(f64),
    PeakIrradiance(f64),
    DepthGrid(DepthGridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DateOrder => write!(f, "end_date cannot be earlier than start_date"),
            ConfigError::TimeStep(e) => write!(f, "{}", e),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
            ConfigError::Latitude(lat) => {
                write!(f, "latitude should be between -90 and 90, got {}", lat)
            }
            ConfigError::Extinction(k) => {
                write!(f, "extinction_coefficient should be >= 0, got {}", k)
            }
            ConfigError::CriticalIrradiance(i_c) => {
                write!(f, "critical_irradiance should be > 0, got {}", i_c)
            }
            ConfigError::PeakIrradiance(i0) => {
                write!(f, "peak_surface_irradiance should be >= 0, got {}", i0)
            }
            ConfigError::DepthGrid(e) => write!(f, "Invalid depth settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<TimeStepParseError> for ConfigError {
    fn from(err: TimeStepParseError) -> ConfigError {
        ConfigError::TimeStep(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl From<DepthGridError> for ConfigError {
    fn from(err: DepthGridError) -> ConfigError {
        ConfigError::DepthGrid(err)
    }
}
