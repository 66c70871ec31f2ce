//! Underwater light
//!
//! Attenuation of surface irradiance with depth and the quantities derived
//! from it.

pub mod attenuation;
pub mod error;

pub use attenuation::{
    IrradianceField, attenuation_profile, euphotic_depth, mixed_layer_mean_irradiance,
};
pub use error::LightError;
