use evfleet::config::{Config, ConfigSource, VehicleSpec};
use evfleet::vehicle::VehicleKind;
use std::fs;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.thresholds.low_battery = 25.0;
    cfg.report.dedup_brands = false;
    cfg.fleet.push(VehicleSpec {
        kind: VehicleKind::Bicycle,
        brand: "Cube".to_string(),
        model: "Stereo".to_string(),
        max_range_km: 140,
        charge: 42.0,
    });

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.thresholds.low_battery, 25.0);
    assert!(!loaded.report.dedup_brands);
    assert_eq!(loaded.fleet, cfg.fleet);
}

#[test]
fn default_fleet_matches_seed() {
    let fleet = Config::default().build_fleet();
    assert_eq!(fleet, evfleet::fleet::seed_fleet());
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();
    assert!(cfg.validate().is_ok());

    cfg.thresholds.low_battery = 120.0;
    assert!(cfg.validate().is_err());

    cfg = Config::default();
    cfg.thresholds.good_charge = -5.0;
    assert!(cfg.validate().is_err());

    cfg = Config::default();
    cfg.report.column_width = 0;
    assert!(cfg.validate().is_err());

    cfg = Config::default();
    cfg.logging.console_level = Some("chatty".to_string());
    assert!(cfg.validate().is_err());

    cfg = Config::default();
    cfg.logging.file_output = true;
    cfg.logging.file.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn empty_fleet_is_valid() {
    let cfg: Config = serde_yaml::from_str("fleet: []\n").unwrap();
    assert!(cfg.validate().is_ok());
    assert!(cfg.build_fleet().is_empty());
}

#[test]
fn resolve_explicit_path_validates() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), "thresholds:\n  good_charge: 150\n").unwrap();
    let err = Config::resolve(Some(tmp.path())).unwrap_err();
    assert!(err.to_string().contains("thresholds.good_charge"));
}

#[test]
fn resolve_explicit_path_reports_file_source() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), "thresholds:\n  low_battery: 35\n").unwrap();
    let (cfg, source) = Config::resolve(Some(tmp.path())).unwrap();
    assert_eq!(cfg.thresholds.low_battery, 35.0);
    assert_eq!(source, ConfigSource::File(tmp.path().to_path_buf()));
    assert_eq!(source.to_string(), tmp.path().display().to_string());
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"fleet: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    assert!(format!("{}", err).contains("Serialization error"));
}

#[test]
fn from_file_with_unknown_kind_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(
        tmp.path(),
        "fleet:\n  - kind: truck\n    brand: X\n    model: Y\n    max_range_km: 1\n    charge: 1\n",
    )
    .unwrap();
    assert!(Config::from_file(tmp.path()).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(tmp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(format!("{}", err).contains("I/O error"));
}
