//! Beer–Lambert attenuation of surface irradiance with depth.
//!
//! The irradiance field is the outer product of the daily surface irradiance
//! series with the attenuation profile `exp(-k z)` of the depth grid:
//!
//! ```text
//! I(t, z) = I_e(t) * exp(-k * z)
//! ```
//!
//! Rows are days, columns are depths. The column count always follows the
//! depth grid; [`IrradianceField::compute_with_resolution`] additionally pins
//! it to a fixed resolution for callers that assume one.
//!
//! ## Usage Example
//!
//! ```rust
//! use sverdrup::depth_grid::DepthGrid;
//! use sverdrup::light::IrradianceField;
//!
//! let grid = DepthGrid::new(vec![0.0, 1.0, 2.0]).unwrap();
//! let field = IrradianceField::compute(&grid, &[100.0], 1.0).unwrap();
//!
//! assert_eq!(field.shape(), (1, 3));
//! assert!((field.at(0, 1) - 36.787944).abs() < 1e-5);
//! ```

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use crate::depth_grid::DepthGrid;
use crate::light::error::LightError;

/// Fraction of surface light remaining at the base of the euphotic zone.
pub const EUPHOTIC_LIGHT_FRACTION: f64 = 0.01;

fn check_extinction(k: f64) -> Result<(), LightError> {
    if !k.is_finite() || k < 0.0 {
        return Err(LightError::InvalidExtinction(k));
    }
    Ok(())
}

/// `exp(-k z)` for every depth in the grid.
pub fn attenuation_profile(grid: &DepthGrid, k: f64) -> Result<Array1<f64>, LightError> {
    check_extinction(k)?;
    Ok(grid.iter().map(|&z| (-k * z).exp()).collect())
}

/// Irradiance at every (day, depth) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceField {
    depth_grid: DepthGrid,
    values: Array2<f64>,
}

impl IrradianceField {
    pub fn compute(
        grid: &DepthGrid,
        surface_irradiance: &[f64],
        k: f64,
    ) -> Result<Self, LightError> {
        if let Some((day, &value)) = surface_irradiance
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(LightError::InvalidIrradiance { day, value });
        }

        let profile = attenuation_profile(grid, k)?;
        let shape = (surface_irradiance.len(), grid.len());
        let values = Array2::from_shape_fn(shape, |(t, z)| surface_irradiance[t] * profile[z]);

        debug!(days = shape.0, depths = shape.1, k, "computed irradiance field");

        Ok(Self {
            depth_grid: grid.clone(),
            values,
        })
    }

    /// Same as [`IrradianceField::compute`] but fails unless the grid has
    /// exactly `resolution` points.
    pub fn compute_with_resolution(
        grid: &DepthGrid,
        surface_irradiance: &[f64],
        k: f64,
        resolution: usize,
    ) -> Result<Self, LightError> {
        if grid.len() != resolution {
            return Err(LightError::ShapeMismatch {
                expected: resolution,
                actual: grid.len(),
            });
        }
        Self::compute(grid, surface_irradiance, k)
    }

    /// (days, depths)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn days(&self) -> usize {
        self.values.nrows()
    }

    pub fn depths(&self) -> usize {
        self.values.ncols()
    }

    pub fn depth_grid(&self) -> &DepthGrid {
        &self.depth_grid
    }

    /// Irradiance profile with depth for one day.
    pub fn profile(&self, day: usize) -> Option<ArrayView1<'_, f64>> {
        (day < self.days()).then(|| self.values.row(day))
    }

    /// Panics if either index is out of bounds, like ndarray indexing.
    pub fn at(&self, day: usize, depth_index: usize) -> f64 {
        self.values[[day, depth_index]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_array(self) -> Array2<f64> {
        self.values
    }
}

/// Depth at which irradiance drops to 1 % of its surface value, `ln(100) / k`.
/// Undefined (`None`) without attenuation.
pub fn euphotic_depth(k: f64) -> Option<f64> {
    if !k.is_finite() || k <= 0.0 {
        return None;
    }
    Some(-EUPHOTIC_LIGHT_FRACTION.ln() / k)
}

/// Mean irradiance over a mixed layer of depth `h`:
/// `i0 * (1 - exp(-k h)) / (k h)`, tending to `i0` as `k h -> 0`.
/// A negative or non-finite `i0` is reported as `InvalidIrradiance` for day 0.
pub fn mixed_layer_mean_irradiance(i0: f64, k: f64, h: f64) -> Result<f64, LightError> {
    check_extinction(k)?;
    if !i0.is_finite() || i0 < 0.0 {
        return Err(LightError::InvalidIrradiance { day: 0, value: i0 });
    }
    if !h.is_finite() || h < 0.0 {
        return Err(LightError::InvalidDepth(h));
    }

    let kh = k * h;
    if kh == 0.0 {
        return Ok(i0);
    }

    // -expm1(-x) == 1 - exp(-x) without cancellation for small x
    Ok(i0 * -(-kh).exp_m1() / kh)
}
