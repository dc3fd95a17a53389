//! Configuration management for evfleet
//!
//! Configuration is a YAML document. Every section is optional; anything left
//! out falls back to the defaults in `config/defaults.rs`, which reproduce the
//! built-in seed fleet and the standard 20% / 50% thresholds.

use crate::error::{FleetError, Result};
use crate::logging::parse_log_level;
use crate::vehicle::{Vehicle, VehicleKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

mod defaults;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vehicles loaded at startup, in order
    pub fleet: Vec<VehicleSpec>,

    /// Charge thresholds for the battery filters
    pub thresholds: ThresholdsConfig,

    /// Report and listing options
    pub report: ReportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// One vehicle entry of the configured fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub max_range_km: u32,
    /// Initial charge in percent; clamped into `[0, 100]` when built
    pub charge: f64,
}

/// Charge thresholds, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Strictly below this is low battery
    pub low_battery: f64,

    /// Strictly above this is a good charge
    pub good_charge: f64,
}

/// Report and listing options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// List each good-charge brand once instead of once per vehicle
    pub dedup_brands: bool,

    /// Width of the brand and model columns
    pub column_width: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Console level override
    pub console_level: Option<String>,

    /// File level override
    pub file_level: Option<String>,

    /// Path to log file (its directory holds the rotated files)
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to the console (stderr)
    pub console_output: bool,

    /// Whether to log to the rotated file
    pub file_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl VehicleSpec {
    /// Build the vehicle described by this entry
    pub fn build(&self) -> Vehicle {
        Vehicle::new(
            self.kind,
            self.brand.clone(),
            self.model.clone(),
            self.max_range_km,
            self.charge,
        )
    }
}

impl From<&Vehicle> for VehicleSpec {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            kind: vehicle.kind(),
            brand: vehicle.brand().to_string(),
            model: vehicle.model().to_string(),
            max_range_km: vehicle.max_range_km(),
            charge: vehicle.charge(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Candidate files searched by [`Config::load`], in order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("evfleet.yaml")];
        if let Some(home) = std::env::var_os("HOME") {
            paths.push(Path::new(&home).join(".config/evfleet/config.yaml"));
        }
        paths.push(PathBuf::from("/etc/evfleet/config.yaml"));
        paths
    }

    /// First default location that exists
    pub fn locate() -> Option<PathBuf> {
        Self::default_paths().into_iter().find(|path| path.exists())
    }

    /// Load from the first default location that exists, else defaults.
    ///
    /// Nothing is logged here: logging is configured from the result, so the
    /// caller reports the [`ConfigSource`] once the subscriber is installed.
    pub fn load() -> Result<(Self, ConfigSource)> {
        match Self::locate() {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Load from an explicit path if given, otherwise search the defaults;
    /// the result is validated either way
    pub fn resolve(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let (config, source) = match path {
            Some(p) => (Self::from_file(p)?, ConfigSource::File(p.to_path_buf())),
            None => Self::load()?,
        };
        config.validate()?;
        Ok((config, source))
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Build the configured fleet, clamping every initial charge
    pub fn build_fleet(&self) -> Vec<Vehicle> {
        self.fleet.iter().map(VehicleSpec::build).collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_threshold("thresholds.low_battery", self.thresholds.low_battery)?;
        validate_threshold("thresholds.good_charge", self.thresholds.good_charge)?;

        if self.report.column_width == 0 {
            return Err(FleetError::validation(
                "report.column_width",
                "Must be greater than 0",
            ));
        }

        parse_log_level(&self.logging.level)
            .map_err(|e| FleetError::validation("logging.level".to_string(), e.to_string()))?;
        if let Some(level) = &self.logging.console_level {
            parse_log_level(level).map_err(|e| {
                FleetError::validation("logging.console_level".to_string(), e.to_string())
            })?;
        }
        if let Some(level) = &self.logging.file_level {
            parse_log_level(level).map_err(|e| {
                FleetError::validation("logging.file_level".to_string(), e.to_string())
            })?;
        }

        if self.logging.file_output && self.logging.file.is_empty() {
            return Err(FleetError::validation(
                "logging.file",
                "Path cannot be empty when file output is enabled",
            ));
        }

        Ok(())
    }
}

fn validate_threshold(field: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(FleetError::validation(field, "Must be within 0..=100"));
    }
    Ok(())
}
