//! Runs the light and critical depth calculations for a configured period.

use chrono::NaiveDate;
use std::fmt;
use tracing::info;

use crate::config::Config;
use crate::critical_depth::critical_depth;
use crate::light::{IrradianceField, LightError, euphotic_depth};
use crate::readers::{ReadError, Table};
use crate::solar::{self, NoonElevation, SolarError};

#[derive(Debug)]
pub enum ModelError {
    Solar(SolarError),
    Light(LightError),
    Read(ReadError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Solar(e) => write!(f, "Solar elevation failed: {}", e),
            ModelError::Light(e) => write!(f, "Light calculation failed: {}", e),
            ModelError::Read(e) => write!(f, "Failed to load tables: {}", e),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<SolarError> for ModelError {
    fn from(err: SolarError) -> ModelError {
        ModelError::Solar(err)
    }
}

impl From<LightError> for ModelError {
    fn from(err: LightError) -> ModelError {
        ModelError::Light(err)
    }
}

impl From<ReadError> for ModelError {
    fn from(err: ReadError) -> ModelError {
        ModelError::Read(err)
    }
}

#[derive(Debug)]
pub struct ModelOutput {
    pub dates: Vec<NaiveDate>,
    pub noon: Vec<NoonElevation>,
    pub surface_irradiance: Vec<f64>,
    pub field: IrradianceField,
    pub critical_depth: Vec<f64>,
    pub euphotic_depth: Option<f64>,
    pub tables: Option<(Table, Table)>,
}

#[derive(Debug)]
pub struct CriticalDepthModel {
    config: Config,
}

impl CriticalDepthModel {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Surface irradiance is the clear-sky noon value for each date, scaled by
    /// the configured peak irradiance. Fails if `k` is zero since the critical
    /// depth is then unbounded.
    pub fn process(&self) -> Result<ModelOutput, ModelError> {
        let config = &self.config;

        let dates: Vec<NaiveDate> = config.clone().collect();
        let days: Vec<u32> = dates.iter().map(|&d| solar::day_of_year(d)).collect();
        info!(
            days = days.len(),
            latitude = config.latitude(),
            "computing noon elevation"
        );

        let noon = solar::high_noon_series(config.latitude(), &days)?;
        let peak = config.peak_surface_irradiance();
        let surface_irradiance: Vec<f64> = noon
            .iter()
            .map(|n| solar::noon_surface_irradiance(peak, n.elevation_deg))
            .collect();

        let k = config.extinction_coefficient();
        let field = IrradianceField::compute(config.depth_grid(), &surface_irradiance, k)?;
        let critical_depth = critical_depth(
            k,
            config.critical_irradiance(),
            &surface_irradiance,
            days.len(),
        )?;

        let tables = match config.tables() {
            Some(pair) => Some(
                config
                    .data_directory()
                    .load_table_pair(&pair.first, &pair.second)?,
            ),
            None => None,
        };

        Ok(ModelOutput {
            dates,
            noon,
            surface_irradiance,
            field,
            critical_depth,
            euphotic_depth: euphotic_depth(k),
            tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TablePair, TimeStep};
    use crate::depth_grid::DepthGrid;
    use crate::readers::DEFAULT_TABLES;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn config(k: f64) -> Config {
        Config::new(
            50.0,
            NaiveDate::from_ymd_opt(2023, 3, 1).expect("Invalid date"),
            NaiveDate::from_ymd_opt(2023, 5, 31).expect("Invalid date"),
            TimeStep::Weekly,
            k,
            10.0,
        )
        .unwrap()
    }

    #[test]
    fn test_process_shapes() {
        let config = config(0.1).with_depth_grid(DepthGrid::linspace(150.0, 300).unwrap());
        let output = CriticalDepthModel::new(config).process().unwrap();

        let n = output.dates.len();
        assert_eq!(n, 14);
        assert_eq!(output.noon.len(), n);
        assert_eq!(output.surface_irradiance.len(), n);
        assert_eq!(output.field.shape(), (n, 300));
        assert_eq!(output.critical_depth.len(), n);
        assert!(output.tables.is_none());
        assert!(output.euphotic_depth.is_some());

        // Spring: the noon sun climbs, and so does the critical depth
        assert!(output.critical_depth.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_process_zero_extinction_fails() {
        let err = CriticalDepthModel::new(config(0.0)).process().unwrap_err();
        assert!(matches!(
            err,
            ModelError::Light(LightError::InvalidCriticalParameters { .. })
        ));
    }

    #[test]
    fn test_process_loads_tables() {
        let tmp = tempdir().unwrap();
        for name in DEFAULT_TABLES {
            let mut file = File::create(tmp.path().join(name)).unwrap();
            file.write_all(b"0,1\n10,0.5\n").unwrap();
        }

        let config = config(0.075)
            .with_data_directory(tmp.path())
            .with_tables(TablePair::default());
        let output = CriticalDepthModel::new(config).process().unwrap();

        let (f1, f2) = output.tables.expect("tables should be loaded");
        assert_eq!((f1.rows, f1.cols), (2, 2));
        assert_eq!(f2.buffer, vec![0.0, 1.0, 10.0, 0.5]);
    }
}
