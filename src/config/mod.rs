use chrono::{Duration, Months, NaiveDate};

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::depth_grid::{DEFAULT_DEPTH_RESOLUTION, DepthGrid};
use crate::readers::{DATA_DIR_ENV, DEFAULT_TABLES, DataDirectory};
use crate::solar;

pub mod error;
pub use error::ConfigError;

pub mod time_step;
pub use time_step::TimeStep;

pub const DEFAULT_DATA_DIRECTORY: &str = "./data/extracted";
pub const DEFAULT_MAX_DEPTH: f64 = 100.0;

/// Clear-sky noon irradiance used to scale the solar elevation when the
/// configuration gives none (relative units).
pub const DEFAULT_PEAK_IRRADIANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePair {
    pub first: String,
    pub second: String,
}

impl Default for TablePair {
    fn default() -> Self {
        Self {
            first: DEFAULT_TABLES[0].to_string(),
            second: DEFAULT_TABLES[1].to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    data_directory: PathBuf,
    tables: Option<TablePair>,
    latitude: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    frequency: TimeStep,
    extinction_coefficient: f64,
    critical_irradiance: f64,
    peak_surface_irradiance: f64,
    depth_grid: DepthGrid,
}

// Deserializes a Config through a helper struct so that dates, frequency and
// the physical parameters are validated before the Config exists.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            data_directory: Option<PathBuf>,
            tables: Option<Vec<String>>,
            latitude: f64,
            start_date: String,
            end_date: String,
            frequency: Option<String>,
            extinction_coefficient: f64,
            critical_irradiance: f64,
            peak_surface_irradiance: Option<f64>,
            depth: Option<DepthHelper>,
        }

        #[derive(Deserialize)]
        struct DepthHelper {
            max_depth: Option<f64>,
            resolution: Option<usize>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let start_date = NaiveDate::parse_from_str(&helper.start_date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid start_date format: {}", e)))?;

        let end_date = NaiveDate::parse_from_str(&helper.end_date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid end_date format: {}", e)))?;

        let frequency = match helper.frequency {
            Some(s) => s
                .parse::<TimeStep>()
                .map_err(|e| D::Error::custom(ConfigError::from(e)))?,
            None => TimeStep::Daily,
        };

        let tables = match helper.tables {
            None => None,
            Some(names) => match <[String; 2]>::try_from(names) {
                Ok([first, second]) => Some(TablePair { first, second }),
                Err(names) => {
                    return Err(D::Error::invalid_length(
                        names.len(),
                        &"exactly two table file names",
                    ));
                }
            },
        };

        let (max_depth, resolution) = match helper.depth {
            Some(depth) => (
                depth.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
                depth.resolution.unwrap_or(DEFAULT_DEPTH_RESOLUTION),
            ),
            None => (DEFAULT_MAX_DEPTH, DEFAULT_DEPTH_RESOLUTION),
        };

        let depth_grid = DepthGrid::linspace(max_depth, resolution)
            .map_err(|e| D::Error::custom(ConfigError::from(e)))?;

        let config = Config {
            data_directory: helper
                .data_directory
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIRECTORY)),
            tables,
            latitude: helper.latitude,
            start_date,
            end_date,
            frequency,
            extinction_coefficient: helper.extinction_coefficient,
            critical_irradiance: helper.critical_irradiance,
            peak_surface_irradiance: helper
                .peak_surface_irradiance
                .unwrap_or(DEFAULT_PEAK_IRRADIANCE),
            depth_grid,
        };

        config.validate().map_err(D::Error::custom)?;

        Ok(config)
    }
}

impl Config {
    pub fn new(
        latitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: TimeStep,
        extinction_coefficient: f64,
        critical_irradiance: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            data_directory: PathBuf::from(DEFAULT_DATA_DIRECTORY),
            tables: None,
            latitude,
            start_date,
            end_date,
            frequency,
            extinction_coefficient,
            critical_irradiance,
            peak_surface_irradiance: DEFAULT_PEAK_IRRADIANCE,
            depth_grid: DepthGrid::default(),
        };
        config.validate()?;

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let config = Self::read_file(path)?;

        Ok(config.with_data_directory_override(std::env::var(DATA_DIR_ENV).ok()))
    }

    fn read_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).map_err(ConfigError::from)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.start_date > self.end_date {
            return Err(ConfigError::DateOrder);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::Latitude(self.latitude));
        }
        if !self.extinction_coefficient.is_finite() || self.extinction_coefficient < 0.0 {
            return Err(ConfigError::Extinction(self.extinction_coefficient));
        }
        if !self.critical_irradiance.is_finite() || self.critical_irradiance <= 0.0 {
            return Err(ConfigError::CriticalIrradiance(self.critical_irradiance));
        }
        if !self.peak_surface_irradiance.is_finite() || self.peak_surface_irradiance < 0.0 {
            return Err(ConfigError::PeakIrradiance(self.peak_surface_irradiance));
        }
        Ok(())
    }

    pub fn with_tables(mut self, tables: TablePair) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn with_depth_grid(mut self, depth_grid: DepthGrid) -> Self {
        self.depth_grid = depth_grid;
        self
    }

    pub fn with_data_directory<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_directory = dir.into();
        self
    }

    /// Replaces the data directory with `env_value` when it is set and
    /// non-empty. `from_file` applies `SVERDRUP_DATA_DIR` this way.
    pub fn with_data_directory_override(mut self, env_value: Option<String>) -> Self {
        let resolved = DataDirectory::resolve(env_value, &self.data_directory);
        self.data_directory = resolved.root().to_path_buf();
        self
    }

    pub fn data_directory(&self) -> DataDirectory {
        DataDirectory::new(&self.data_directory)
    }

    pub fn tables(&self) -> Option<&TablePair> {
        self.tables.as_ref()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn extinction_coefficient(&self) -> f64 {
        self.extinction_coefficient
    }

    pub fn critical_irradiance(&self) -> f64 {
        self.critical_irradiance
    }

    pub fn peak_surface_irradiance(&self) -> f64 {
        self.peak_surface_irradiance
    }

    pub fn depth_grid(&self) -> &DepthGrid {
        &self.depth_grid
    }

    /// Day of year for every date of the period.
    pub fn day_series(&self) -> Vec<u32> {
        self.clone().map(solar::day_of_year).collect()
    }

    fn increment_date(&self, current_date: NaiveDate) -> Result<NaiveDate, String> {
        match self.frequency {
            TimeStep::Daily => Ok(current_date + Duration::days(1)),
            TimeStep::Weekly => Ok(current_date + Duration::weeks(1)),
            TimeStep::Monthly => current_date
                .checked_add_months(Months::new(1))
                .ok_or_else(|| format!("Failed to add a month to date: {}", current_date)),
        }
    }
}

impl Iterator for Config {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_date <= self.end_date {
            let current_date = self.start_date;
            self.start_date = self.increment_date(self.start_date).ok()?;
            Some(current_date)
        } else {
            None
        }
    }
}
