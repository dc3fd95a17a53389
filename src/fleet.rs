//! Fleet queries and actions for evfleet
//!
//! Every operation borrows the fleet for the duration of one call and keeps
//! nothing afterwards. The free functions are the core; [`FleetService`]
//! binds them to configured thresholds and adds structured logging.

use crate::config::ThresholdsConfig;
use crate::logging::{LogContext, StructuredLogger, get_logger, get_logger_with_context};
use crate::vehicle::Vehicle;
use std::collections::HashSet;

/// Vehicles strictly below this charge are low on battery
pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;

/// Vehicles strictly above this charge have a good charge
pub const GOOD_CHARGE_THRESHOLD: f64 = 50.0;

/// The fleet every run starts with unless configuration says otherwise
pub fn seed_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::car("Tesla", "Model 3", 500, 65.5),
        Vehicle::car("Nissan", "Leaf", 350, 15.0),
        Vehicle::motorcycle("Zero", "SR/F", 250, 80.2),
        Vehicle::motorcycle("Harley", "LiveWire", 235, 19.9),
        Vehicle::bicycle("Giant", "Trance E+", 120, 95.0),
        Vehicle::bicycle("Trek", "Rail", 110, 55.0),
        Vehicle::car("Ford", "Mustang ME", 480, 8.5),
    ]
}

/// Every vehicle, in insertion order
pub fn list_all(fleet: &[Vehicle]) -> &[Vehicle] {
    fleet
}

/// Vehicles with charge strictly below `threshold`, in fleet order
pub fn low_battery(fleet: &[Vehicle], threshold: f64) -> Vec<&Vehicle> {
    fleet.iter().filter(|v| v.charge() < threshold).collect()
}

/// Brands of vehicles with charge strictly above `threshold`, each brand once,
/// in order of first occurrence
pub fn brands_with_good_charge(fleet: &[Vehicle], threshold: f64) -> Vec<&str> {
    let mut seen = HashSet::new();
    brand_mentions_with_good_charge(fleet, threshold)
        .into_iter()
        .filter(|brand| seen.insert(*brand))
        .collect()
}

/// Like [`brands_with_good_charge`] but keeps one entry per matching vehicle
pub fn brand_mentions_with_good_charge(fleet: &[Vehicle], threshold: f64) -> Vec<&str> {
    fleet
        .iter()
        .filter(|v| v.charge() > threshold)
        .map(Vehicle::brand)
        .collect()
}

/// Sum of every vehicle's consumption rate, in percent per km. Not rounded.
pub fn total_consumption_per_km(fleet: &[Vehicle]) -> f64 {
    // f64 `sum` starts at -0.0; an empty fleet must report 0.00
    fleet
        .iter()
        .fold(0.0, |acc, v| acc + v.consumption_per_km())
}

/// Charge the first vehicle below full and return it. `None` means the whole
/// fleet is already full and nothing was touched.
pub fn charge_first_needy(fleet: &mut [Vehicle]) -> Option<&Vehicle> {
    let vehicle = fleet.iter_mut().find(|v| v.needs_charge())?;
    vehicle.charge_battery();
    Some(&*vehicle)
}

/// Fleet operations bound to configured thresholds
pub struct FleetService {
    thresholds: ThresholdsConfig,
    logger: StructuredLogger,
}

impl FleetService {
    pub fn new(thresholds: ThresholdsConfig) -> Self {
        let logger = get_logger("fleet");
        Self { thresholds, logger }
    }

    pub fn thresholds(&self) -> &ThresholdsConfig {
        &self.thresholds
    }

    pub fn list_all<'a>(&self, fleet: &'a [Vehicle]) -> &'a [Vehicle] {
        list_all(fleet)
    }

    pub fn low_battery<'a>(&self, fleet: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        let found = low_battery(fleet, self.thresholds.low_battery);
        self.logger.debug(&format!(
            "{} of {} vehicles below {:.1}%",
            found.len(),
            fleet.len(),
            self.thresholds.low_battery
        ));
        found
    }

    pub fn brands_with_good_charge<'a>(&self, fleet: &'a [Vehicle]) -> Vec<&'a str> {
        brands_with_good_charge(fleet, self.thresholds.good_charge)
    }

    pub fn brand_mentions_with_good_charge<'a>(&self, fleet: &'a [Vehicle]) -> Vec<&'a str> {
        brand_mentions_with_good_charge(fleet, self.thresholds.good_charge)
    }

    pub fn total_consumption_per_km(&self, fleet: &[Vehicle]) -> f64 {
        total_consumption_per_km(fleet)
    }

    pub fn charge_first_needy<'a>(&self, fleet: &'a mut [Vehicle]) -> Option<&'a Vehicle> {
        match charge_first_needy(fleet) {
            Some(vehicle) => {
                let logger = get_logger_with_context(
                    LogContext::new("fleet")
                        .with_vehicle(format!("{} {}", vehicle.brand(), vehicle.model()))
                        .with_field("mode", vehicle.kind().charge_mode().to_string()),
                );
                logger.info("Vehicle charged to full");
                Some(vehicle)
            }
            None => {
                self.logger.info("Fleet fully charged, nothing to do");
                None
            }
        }
    }
}

impl Default for FleetService {
    fn default() -> Self {
        Self::new(ThresholdsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleKind;

    #[test]
    fn test_seed_fleet_composition() {
        let fleet = seed_fleet();
        assert_eq!(fleet.len(), 7);
        let count = |k| fleet.iter().filter(|v| v.kind() == k).count();
        assert_eq!(count(VehicleKind::Car), 3);
        assert_eq!(count(VehicleKind::Motorcycle), 2);
        assert_eq!(count(VehicleKind::Bicycle), 2);
    }

    #[test]
    fn test_threshold_is_strict() {
        let fleet = vec![
            Vehicle::car("A", "a", 1, 20.0),
            Vehicle::car("B", "b", 1, 50.0),
        ];
        assert!(low_battery(&fleet, 20.0).is_empty());
        assert!(brands_with_good_charge(&fleet, 50.0).is_empty());
    }

    #[test]
    fn test_brand_dedup_keeps_first_occurrence() {
        let fleet = vec![
            Vehicle::car("Tesla", "S", 1, 90.0),
            Vehicle::bicycle("Giant", "X", 1, 70.0),
            Vehicle::car("Tesla", "3", 1, 80.0),
        ];
        assert_eq!(brands_with_good_charge(&fleet, 50.0), vec!["Tesla", "Giant"]);
        assert_eq!(
            brand_mentions_with_good_charge(&fleet, 50.0),
            vec!["Tesla", "Giant", "Tesla"]
        );
    }

    #[test]
    fn test_empty_fleet() {
        let mut fleet: Vec<Vehicle> = Vec::new();
        assert!(list_all(&fleet).is_empty());
        assert_eq!(total_consumption_per_km(&fleet), 0.0);
        assert!(total_consumption_per_km(&fleet).is_sign_positive());
        assert!(charge_first_needy(&mut fleet).is_none());
    }

    #[test]
    fn test_service_uses_configured_thresholds() {
        let fleet = seed_fleet();
        let service = FleetService::new(ThresholdsConfig {
            low_battery: 60.0,
            good_charge: 90.0,
        });
        assert_eq!(service.low_battery(&fleet).len(), 4);
        assert_eq!(service.brands_with_good_charge(&fleet), vec!["Giant"]);
    }
}
