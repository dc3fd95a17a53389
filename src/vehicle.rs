//! Vehicle model for evfleet
//!
//! A vehicle is one of a closed set of kinds. Everything that differs per kind
//! (consumption rate, charge mode, display name) is a `match` on
//! [`VehicleKind`]; the charge invariant lives in one place, [`clamp_charge`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Lowest representable charge, in percent
pub const MIN_CHARGE: f64 = 0.0;

/// Full battery, in percent
pub const FULL_CHARGE: f64 = 100.0;

/// Default column width used by [`Vehicle::describe`]
pub const DEFAULT_COLUMN_WIDTH: usize = 10;

/// Vehicle kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Bicycle,
}

/// How a vehicle kind is charged. Informational only: every mode ends at a
/// full battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeMode {
    Slow,
    Normal,
    Fast,
}

impl VehicleKind {
    /// Percent of battery consumed per kilometer
    pub const fn consumption_per_km(self) -> f64 {
        match self {
            Self::Car => 0.30,
            Self::Motorcycle => 0.15,
            Self::Bicycle => 0.05,
        }
    }

    pub const fn charge_mode(self) -> ChargeMode {
        match self {
            Self::Car => ChargeMode::Slow,
            Self::Motorcycle => ChargeMode::Normal,
            Self::Bicycle => ChargeMode::Fast,
        }
    }

    /// Display name used in listings
    pub const fn name(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::Bicycle => "Bicycle",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ChargeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        })
    }
}

/// Clamp a charge value into `[0, 100]`. NaN maps to 0.
pub fn clamp_charge(value: f64) -> f64 {
    if value.is_nan() || value <= MIN_CHARGE {
        MIN_CHARGE
    } else if value > FULL_CHARGE {
        FULL_CHARGE
    } else {
        value
    }
}

/// An electric vehicle tracked by the fleet
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    kind: VehicleKind,
    brand: String,
    model: String,
    max_range_km: u32,
    charge: f64,
}

impl Vehicle {
    /// Create a vehicle. The initial charge is clamped, never rejected.
    pub fn new(
        kind: VehicleKind,
        brand: impl Into<String>,
        model: impl Into<String>,
        max_range_km: u32,
        charge: f64,
    ) -> Self {
        let mut vehicle = Self {
            kind,
            brand: brand.into(),
            model: model.into(),
            max_range_km,
            charge: MIN_CHARGE,
        };
        vehicle.set_charge(charge);
        vehicle
    }

    pub fn car(
        brand: impl Into<String>,
        model: impl Into<String>,
        max_range_km: u32,
        charge: f64,
    ) -> Self {
        Self::new(VehicleKind::Car, brand, model, max_range_km, charge)
    }

    pub fn motorcycle(
        brand: impl Into<String>,
        model: impl Into<String>,
        max_range_km: u32,
        charge: f64,
    ) -> Self {
        Self::new(VehicleKind::Motorcycle, brand, model, max_range_km, charge)
    }

    pub fn bicycle(
        brand: impl Into<String>,
        model: impl Into<String>,
        max_range_km: u32,
        charge: f64,
    ) -> Self {
        Self::new(VehicleKind::Bicycle, brand, model, max_range_km, charge)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Maximum range in kilometers (informational)
    pub fn max_range_km(&self) -> u32 {
        self.max_range_km
    }

    /// Current charge in percent, always within `[0, 100]`
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Whether the battery is below full
    pub fn needs_charge(&self) -> bool {
        self.charge < FULL_CHARGE
    }

    fn set_charge(&mut self, value: f64) {
        self.charge = clamp_charge(value);
    }

    /// Charge the battery to full. Always succeeds.
    pub fn charge_battery(&mut self) {
        debug!(
            kind = %self.kind,
            mode = %self.kind.charge_mode(),
            brand = %self.brand,
            model = %self.model,
            from = self.charge,
            "charging battery"
        );
        self.set_charge(FULL_CHARGE);
    }

    /// Percent of battery consumed per kilometer for this vehicle's kind
    pub fn consumption_per_km(&self) -> f64 {
        self.kind.consumption_per_km()
    }

    /// One-line description with kind, brand, model and charge to two decimals
    pub fn describe(&self) -> String {
        self.describe_with_width(DEFAULT_COLUMN_WIDTH)
    }

    /// Same as [`describe`](Self::describe) with a custom brand/model column width
    pub fn describe_with_width(&self, width: usize) -> String {
        format!(
            "Type: {:<20} | Brand: {:<width$} | Model: {:<width$} | Charge: {:>6.2}%",
            self.kind.name(),
            self.brand,
            self.model,
            self.charge,
            width = width
        )
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
