use super::*;
use crate::fleet::{GOOD_CHARGE_THRESHOLD, LOW_BATTERY_THRESHOLD, seed_fleet};
use crate::vehicle::DEFAULT_COLUMN_WIDTH;

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            low_battery: LOW_BATTERY_THRESHOLD,
            good_charge: GOOD_CHARGE_THRESHOLD,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dedup_brands: true,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            // stdout belongs to the menu; keep stderr quiet unless asked
            console_level: Some("WARN".to_string()),
            file_level: None,
            file: "/tmp/evfleet.log".to_string(),
            backup_count: 5,
            console_output: true,
            file_output: false,
            json_format: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fleet: seed_fleet().iter().map(VehicleSpec::from).collect(),
            thresholds: ThresholdsConfig::default(),
            report: ReportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
