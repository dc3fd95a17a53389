//! Non-interactive fleet report
//!
//! Runs the four read-only queries in order and renders them either as the
//! sectioned text report or as a JSON [`FleetSnapshot`].

use crate::config::ReportConfig;
use crate::error::Result;
use crate::fleet::FleetService;
use crate::render;
use crate::vehicle::{ChargeMode, Vehicle, VehicleKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output format of the batch report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// One vehicle as it appears in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub max_range_km: u32,
    pub charge: f64,
    pub consumption_per_km: f64,
    pub charge_mode: ChargeMode,
}

/// Point-in-time view of the fleet and every query result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub generated_at: DateTime<Utc>,
    pub low_battery_threshold: f64,
    pub good_charge_threshold: f64,
    pub vehicles: Vec<VehicleEntry>,
    pub low_battery: Vec<VehicleEntry>,
    pub good_charge_brands: Vec<String>,
    pub total_consumption_per_km: f64,
}

impl From<&Vehicle> for VehicleEntry {
    fn from(v: &Vehicle) -> Self {
        Self {
            kind: v.kind(),
            brand: v.brand().to_string(),
            model: v.model().to_string(),
            max_range_km: v.max_range_km(),
            charge: v.charge(),
            consumption_per_km: v.consumption_per_km(),
            charge_mode: v.kind().charge_mode(),
        }
    }
}

impl FleetSnapshot {
    pub fn build(fleet: &[Vehicle], service: &FleetService, report: &ReportConfig) -> Self {
        let thresholds = service.thresholds();
        Self {
            generated_at: Utc::now(),
            low_battery_threshold: thresholds.low_battery,
            good_charge_threshold: thresholds.good_charge,
            vehicles: service.list_all(fleet).iter().map(VehicleEntry::from).collect(),
            low_battery: service
                .low_battery(fleet)
                .into_iter()
                .map(VehicleEntry::from)
                .collect(),
            good_charge_brands: good_charge_brands(fleet, service, report)
                .into_iter()
                .map(str::to_string)
                .collect(),
            total_consumption_per_km: service.total_consumption_per_km(fleet),
        }
    }
}

fn good_charge_brands<'a>(
    fleet: &'a [Vehicle],
    service: &FleetService,
    report: &ReportConfig,
) -> Vec<&'a str> {
    if report.dedup_brands {
        service.brands_with_good_charge(fleet)
    } else {
        service.brand_mentions_with_good_charge(fleet)
    }
}

/// Sectioned text report
pub fn render_text(fleet: &[Vehicle], service: &FleetService, report: &ReportConfig) -> String {
    let thresholds = service.thresholds();
    let width = report.column_width;
    let mut out: Vec<String> = Vec::new();

    let mut section = |title: String, lines: Vec<String>, last: bool| {
        out.push(render::section_header(&title));
        out.extend(lines);
        if !last {
            out.push(String::new());
            out.push(render::separator());
            out.push(String::new());
        }
    };

    let vehicles = service.list_all(fleet);
    section(
        "Electric Vehicle Fleet".to_string(),
        if vehicles.is_empty() {
            vec![render::empty_fleet_notice()]
        } else {
            render::vehicle_lines(vehicles, width)
        },
        false,
    );

    let low = service.low_battery(fleet);
    section(
        format!(
            "Low Battery (< {}%)",
            render::format_percent(thresholds.low_battery)
        ),
        if low.is_empty() {
            vec![render::no_low_battery_notice(thresholds.low_battery)]
        } else {
            render::vehicle_lines(low, width)
        },
        false,
    );

    let brands = good_charge_brands(fleet, service, report);
    section(
        format!(
            "Brands with Good Charge (> {}%)",
            render::format_percent(thresholds.good_charge)
        ),
        if brands.is_empty() {
            vec![render::no_good_charge_notice(thresholds.good_charge)]
        } else {
            render::brand_lines(&brands)
        },
        false,
    );

    section(
        "Total Fleet Consumption".to_string(),
        vec![render::total_consumption_line(
            service.total_consumption_per_km(fleet),
        )],
        true,
    );

    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Render the report in the requested format
pub fn render(
    fleet: &[Vehicle],
    service: &FleetService,
    report: &ReportConfig,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(fleet, service, report)),
        ReportFormat::Json => {
            let snapshot = FleetSnapshot::build(fleet, service, report);
            let mut json = serde_json::to_string_pretty(&snapshot)?;
            json.push('\n');
            Ok(json)
        }
    }
}
