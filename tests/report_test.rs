use evfleet::config::ReportConfig;
use evfleet::fleet::{FleetService, seed_fleet};
use evfleet::report::{FleetSnapshot, ReportFormat, render};

#[test]
fn text_report_matches_seed_fleet() {
    let fleet = seed_fleet();
    let text = render(
        &fleet,
        &FleetService::default(),
        &ReportConfig::default(),
        ReportFormat::Text,
    )
    .unwrap();

    let low_section = text
        .split("--- Low Battery (< 20%) ---")
        .nth(1)
        .unwrap()
        .split("----------------------------------------")
        .next()
        .unwrap();
    let rows: Vec<&str> = low_section.lines().filter(|l| l.starts_with("Type:")).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("Nissan"));
    assert!(rows[1].contains("Harley"));
    assert!(rows[2].contains("Ford"));

    assert!(text.contains("- Tesla\n- Zero\n- Giant\n- Trek\n"));
}

#[test]
fn report_does_not_mutate_fleet() {
    let fleet = seed_fleet();
    let _ = render(
        &fleet,
        &FleetService::default(),
        &ReportConfig::default(),
        ReportFormat::Json,
    )
    .unwrap();
    assert_eq!(fleet, seed_fleet());
}

#[test]
fn json_snapshot_fields() {
    let fleet = seed_fleet();
    let json = render(
        &fleet,
        &FleetService::default(),
        &ReportConfig::default(),
        ReportFormat::Json,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["low_battery_threshold"], 20.0);
    assert_eq!(value["vehicles"][0]["kind"], "car");
    assert_eq!(value["vehicles"][0]["charge_mode"], "slow");
    assert_eq!(value["vehicles"][4]["charge_mode"], "fast");
    assert!(value["generated_at"].is_string());

    let snapshot: FleetSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(snapshot.low_battery[2].brand, "Ford");
}
