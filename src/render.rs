//! Text rendering shared by the interactive console and the batch report

use crate::vehicle::Vehicle;

/// Width of the horizontal rule between report sections
pub const SEPARATOR_WIDTH: usize = 40;

pub fn section_header(title: &str) -> String {
    format!("--- {} ---", title)
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// One fixed-width row per vehicle
pub fn vehicle_lines<'a, I>(vehicles: I, column_width: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    vehicles
        .into_iter()
        .map(|v| v.describe_with_width(column_width))
        .collect()
}

/// One bullet per brand
pub fn brand_lines<S: AsRef<str>>(brands: &[S]) -> Vec<String> {
    brands.iter().map(|b| format!("- {}", b.as_ref())).collect()
}

pub fn total_consumption_line(total: f64) -> String {
    format!(
        "Total fleet consumption: {:.2}% of battery per km.",
        total
    )
}

pub fn no_low_battery_notice(threshold: f64) -> String {
    format!("No vehicle is below {}% charge.", format_percent(threshold))
}

pub fn no_good_charge_notice(threshold: f64) -> String {
    format!(
        "No vehicle has more than {}% charge.",
        format_percent(threshold)
    )
}

pub fn empty_fleet_notice() -> String {
    "The fleet is empty.".to_string()
}

pub fn fully_charged_notice() -> String {
    "Every vehicle is already fully charged.".to_string()
}

/// Confirmation after a charge action, naming the charge mode
pub fn charged_line(vehicle: &Vehicle) -> String {
    format!(
        "Charged {} {} {} ({} charge): battery at {:.2}%.",
        vehicle.kind().name().to_lowercase(),
        vehicle.brand(),
        vehicle.model(),
        vehicle.kind().charge_mode(),
        vehicle.charge()
    )
}

/// Threshold as shown in menus: no decimals when whole
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_lines() {
        assert_eq!(brand_lines(&["Tesla", "Zero"]), vec!["- Tesla", "- Zero"]);
        assert!(brand_lines::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_total_consumption_line() {
        assert_eq!(
            total_consumption_line(1.3000000000000003),
            "Total fleet consumption: 1.30% of battery per km."
        );
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(20.0), "20");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(no_low_battery_notice(20.0), "No vehicle is below 20% charge.");
    }

    #[test]
    fn test_charged_line() {
        let v = Vehicle::bicycle("Giant", "Trance E+", 120, 100.0);
        assert_eq!(
            charged_line(&v),
            "Charged bicycle Giant Trance E+ (fast charge): battery at 100.00%."
        );
    }

    #[test]
    fn test_vehicle_lines_width() {
        let fleet = [Vehicle::car("Ford", "Mustang ME", 480, 8.5)];
        let lines = vehicle_lines(&fleet, 12);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("| Brand: Ford         |"));
        assert!(lines[0].ends_with("Charge:   8.50%"));
    }
}
