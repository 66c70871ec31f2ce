use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LightError {
    InvalidExtinction(f64),
    InvalidIrradiance { day: usize, value: f64 },
    InvalidCriticalParameters { k: f64, critical_irradiance: f64 },
    ShapeMismatch { expected: usize, actual: usize },
    InvalidDepth(f64),
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightError::InvalidExtinction(k) => {
                write!(f, "extinction coefficient must be finite and >= 0, got {}", k)
            }
            LightError::InvalidIrradiance { day, value } => write!(
                f,
                "surface irradiance must be finite and >= 0, got {} on day index {}",
                value, day
            ),
            LightError::InvalidCriticalParameters {
                k,
                critical_irradiance,
            } => write!(
                f,
                "k * I_c must be finite and > 0 (k = {}, I_c = {})",
                k, critical_irradiance
            ),
            LightError::ShapeMismatch { expected, actual } => write!(
                f,
                "depth grid has {} points but the field expects {} columns",
                actual, expected
            ),
            LightError::InvalidDepth(d) => {
                write!(f, "depth must be finite and >= 0, got {}", d)
            }
        }
    }
}

impl std::error::Error for LightError {}
