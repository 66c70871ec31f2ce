//! Light and critical depth calculations for Sverdrup's bloom onset model.
//!
//! - [`light`]: Beer–Lambert irradiance field over days and depths
//! - [`solar`]: noon solar elevation and declination
//! - [`critical_depth`]: Sverdrup critical depth from surface irradiance
//! - [`readers`]: delimited numeric tables from a data directory
//! - [`legend`]: legend label de-duplication for plots

pub mod config;
pub mod critical_depth;
pub mod depth_grid;
pub mod legend;
pub mod light;
pub mod model;
pub mod readers;
pub mod solar;
pub mod utils;
