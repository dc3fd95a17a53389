//! # evfleet - Electric Vehicle Fleet Inventory
//!
//! A small console inventory manager for a fleet of electric cars,
//! motorcycles and bicycles. The operator can list the fleet, filter it by
//! battery level, total up per-kilometer consumption and charge the first
//! vehicle that needs it.
//!
//! ## Architecture
//!
//! - `vehicle`: vehicle kinds, clamped charge, per-kind consumption
//! - `fleet`: stateless queries and the charge action over an ordered fleet
//! - `config`: YAML configuration (fleet, thresholds, report, logging)
//! - `logging`: structured logging and tracing
//! - `render`: text formatting shared by the console and the report
//! - `console`: interactive menu loop
//! - `report`: non-interactive text/JSON report
//! - `error`: error types for the layers around the core

pub mod config;
pub mod console;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod render;
pub mod report;
pub mod vehicle;

// Re-export commonly used types
pub use config::Config;
pub use error::{FleetError, Result};
pub use fleet::FleetService;
pub use vehicle::{Vehicle, VehicleKind};
