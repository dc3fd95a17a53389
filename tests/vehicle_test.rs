use evfleet::vehicle::{Vehicle, VehicleKind, clamp_charge};

const KINDS: [VehicleKind; 3] = [
    VehicleKind::Car,
    VehicleKind::Motorcycle,
    VehicleKind::Bicycle,
];

#[test]
fn charge_is_always_within_bounds() {
    for value in [-1000.0, -0.5, 0.0, 0.01, 42.0, 99.99, 100.0, 100.01, 1e9] {
        let c = clamp_charge(value);
        assert!((0.0..=100.0).contains(&c), "{} clamped to {}", value, c);
    }
    assert_eq!(clamp_charge(-0.5), 0.0);
    assert_eq!(clamp_charge(100.01), 100.0);
}

#[test]
fn in_range_charge_reads_back_exactly() {
    for kind in KINDS {
        for value in [0.0, 8.5, 19.9, 65.5, 80.2, 100.0] {
            let v = Vehicle::new(kind, "Brand", "Model", 100, value);
            assert_eq!(v.charge(), value);
        }
    }
}

#[test]
fn charge_battery_fills_every_kind() {
    for kind in KINDS {
        for start in [-10.0, 0.0, 50.0, 100.0] {
            let mut v = Vehicle::new(kind, "Brand", "Model", 100, start);
            v.charge_battery();
            assert_eq!(v.charge(), 100.0);
            assert!(!v.needs_charge());
        }
    }
}

#[test]
fn consumption_is_constant_per_kind() {
    let car = Vehicle::car("Tesla", "Model 3", 500, 10.0);
    let moto = Vehicle::motorcycle("Zero", "SR/F", 250, 10.0);
    let bike = Vehicle::bicycle("Trek", "Rail", 110, 10.0);
    for _ in 0..3 {
        assert_eq!(car.consumption_per_km(), 0.30);
        assert_eq!(moto.consumption_per_km(), 0.15);
        assert_eq!(bike.consumption_per_km(), 0.05);
    }
}

#[test]
fn charging_does_not_change_consumption() {
    let mut car = Vehicle::car("Ford", "Mustang ME", 480, 8.5);
    car.charge_battery();
    assert_eq!(car.consumption_per_km(), 0.30);
    assert_eq!(car.max_range_km(), 480);
    assert_eq!(car.brand(), "Ford");
    assert_eq!(car.model(), "Mustang ME");
}

#[test]
fn describe_contains_identity_and_two_decimal_charge() {
    let v = Vehicle::motorcycle("Harley", "LiveWire", 235, 19.9);
    let s = v.describe();
    assert!(s.contains("Motorcycle"));
    assert!(s.contains("Harley"));
    assert!(s.contains("LiveWire"));
    assert!(s.contains("19.90%"));
}
