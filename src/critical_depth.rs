//! Sverdrup critical depth from surface irradiance.
//!
//! For a surface irradiance `I_e`, extinction coefficient `k` and a
//! compensation (critical) irradiance `I_c`, the critical depth is
//! `D_cr = I_e / (k * I_c)`.

use tracing::warn;

use crate::light::LightError;

/// Critical depth for the first `days` entries of `surface_irradiance`.
///
/// The series is truncated to `min(days, surface_irradiance.len())`.
pub fn critical_depth(
    k: f64,
    critical_irradiance: f64,
    surface_irradiance: &[f64],
    days: usize,
) -> Result<Vec<f64>, LightError> {
    let denominator = k * critical_irradiance;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(LightError::InvalidCriticalParameters {
            k,
            critical_irradiance,
        });
    }

    if days > surface_irradiance.len() {
        warn!(
            requested = days,
            available = surface_irradiance.len(),
            "critical depth requested for more days than the irradiance series holds"
        );
    }

    Ok(surface_irradiance
        .iter()
        .take(days)
        .map(|i_e| i_e / denominator)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_critical_depth_values() {
        let d_cr = critical_depth(0.1, 10.0, &[100.0, 50.0, 0.0], 3).unwrap();
        assert_eq!(d_cr.len(), 3);
        assert_relative_eq!(d_cr[0], 100.0, epsilon = 1e-12);
        assert_relative_eq!(d_cr[1], 50.0, epsilon = 1e-12);
        assert_eq!(d_cr[2], 0.0);
    }

    #[test]
    fn test_halving_threshold_doubles_depth() {
        let surface = [12.0, 80.0, 230.5, 7.25];
        let full = critical_depth(0.075, 4.0, &surface, surface.len()).unwrap();
        let half = critical_depth(0.075, 2.0, &surface, surface.len()).unwrap();

        for (f, h) in full.iter().zip(half.iter()) {
            assert_relative_eq!(*h, 2.0 * f, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_truncates_to_requested_days() {
        let surface = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(critical_depth(1.0, 1.0, &surface, 2).unwrap(), vec![1.0, 2.0]);
        assert_eq!(critical_depth(1.0, 1.0, &surface, 10).unwrap().len(), 4);
        assert!(critical_depth(1.0, 1.0, &surface, 0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_denominator() {
        assert!(matches!(
            critical_depth(0.0, 10.0, &[1.0], 1),
            Err(LightError::InvalidCriticalParameters { .. })
        ));
        assert!(matches!(
            critical_depth(0.1, -1.0, &[1.0], 1),
            Err(LightError::InvalidCriticalParameters { .. })
        ));
        assert!(matches!(
            critical_depth(f64::INFINITY, 1.0, &[1.0], 1),
            Err(LightError::InvalidCriticalParameters { .. })
        ));
    }
}
