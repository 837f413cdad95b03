use entity::{Entity, IsoDuration};
use serde_json::json;

use crate::launch::LaunchVehicle;

#[test]
fn numeric_launch_interval_is_days() {
    let vehicle = LaunchVehicle::decode(json!({
        "name": "Vega",
        "dryMass": 147,
        "massToLEO": 1450,
        "meanTimeBetweenLaunches": 221
    }))
    .unwrap();

    assert_eq!(vehicle.mass_to_leo, Some(1450.0));
    assert_eq!(
        vehicle.mean_time_between_launches,
        Some(IsoDuration::new("P221D"))
    );
}

#[test]
fn launch_interval_string_is_kept() {
    let vehicle =
        LaunchVehicle::decode(json!({"meanTimeBetweenLaunches": "P0Y0M133D"})).unwrap();
    assert_eq!(
        vehicle.mean_time_between_launches.unwrap().as_str(),
        "P0Y0M133D"
    );
}

#[test]
fn launch_vehicle_encodes_leo_key_verbatim() {
    let vehicle = LaunchVehicle {
        name: Some("AtlasV".to_string()),
        mass_to_leo: Some(9800.0),
        ..Default::default()
    };
    let doc = vehicle.encode().unwrap();

    assert_eq!(doc["@type"], "LaunchVehicle");
    assert_eq!(doc["massToLEO"], 9800.0);
    assert!(doc.get("massToLeo").is_none());
    assert!(doc.get("cost").is_none());
}
