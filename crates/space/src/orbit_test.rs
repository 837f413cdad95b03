use approx::assert_relative_eq;
use entity::{Entity, QuantitativeRange, Rangeable};
use serde_json::json;
use units::{Angle, Length};

use crate::orbit::{
    Inclination, Orbit, OrbitType, orbital_period, semimajor_axis, sun_synchronous_inclination,
};

fn inclination_degrees(orbit: &Orbit) -> f64 {
    orbit
        .inclination_value()
        .and_then(|inclination| inclination.angle())
        .map(|angle| angle.to_degrees())
        .unwrap_or(f64::NAN)
}

#[test]
fn sun_synchronous_inclination_at_705_km() {
    let inclination = sun_synchronous_inclination(Length::from_km(705.0));
    assert_relative_eq!(inclination.to_degrees(), 98.2, epsilon = 0.1);
}

#[test]
fn semimajor_axis_adds_earth_radius() {
    assert_relative_eq!(semimajor_axis(Length::from_km(705.0)).to_km(), 7083.14);
}

#[test]
fn orbital_period_at_705_km() {
    let period = orbital_period(Length::from_km(705.0));
    assert_relative_eq!(period.to_seconds(), 5932.66, epsilon = 0.01);
    assert_relative_eq!(period.to_minutes(), 98.88, epsilon = 0.01);
}

#[test]
fn sun_synchronous_orbit_resolves_inclination_and_eccentricity() {
    let orbit = Orbit::from_json(
        r#"{"@type": "Orbit", "orbitType": "SUN_SYNCHRONOUS", "altitude": 705, "eccentricity": 0.3}"#,
    )
    .unwrap();

    assert_eq!(orbit.orbit_type, Some(OrbitType::SunSynchronous));
    assert_eq!(orbit.eccentricity, Some(0.0));
    assert_relative_eq!(inclination_degrees(&orbit), 98.208, epsilon = 1e-3);
}

#[test]
fn sso_sentinel_is_case_insensitive_and_resolved() {
    let orbit = Orbit::decode(json!({"altitude": 600, "inclination": "sso"})).unwrap();
    assert_relative_eq!(inclination_degrees(&orbit), 97.787, epsilon = 1e-3);
    assert_eq!(orbit.orbit_type, None);
    assert_eq!(orbit.eccentricity, None);
}

#[test]
fn sso_sentinel_without_single_altitude_is_kept() {
    let orbit = Orbit::decode(json!({"altitude": [500, 600], "inclination": "SSO"})).unwrap();
    assert!(orbit.is_sun_synchronous());
    assert_eq!(orbit.encode().unwrap()["inclination"], "SSO");
}

#[test]
fn keplerian_orbit_defaults_missing_elements() {
    let orbit = Orbit::decode(json!({"orbitType": "keplerian", "inclination": 45})).unwrap();
    assert_eq!(orbit.eccentricity, Some(0.0));
    assert_eq!(orbit.periapsis_argument, Some(Angle::zero()));

    let eccentric =
        Orbit::decode(json!({"orbitType": "KEPLERIAN", "eccentricity": 0.1})).unwrap();
    assert_eq!(eccentric.eccentricity, Some(0.1));
}

#[test]
fn unknown_orbit_type_is_unset() {
    let orbit = Orbit::decode(json!({"orbitType": "MOLNIYA", "altitude": 500})).unwrap();
    assert_eq!(orbit.orbit_type, None);
}

#[test]
fn non_string_orbit_type_is_unset() {
    let orbit = Orbit::decode(json!({"orbitType": 5, "altitude": 705})).unwrap();
    assert_eq!(orbit.orbit_type, None);
    assert_relative_eq!(orbit.altitude_value().unwrap().to_km(), 705.0);
}

#[test]
fn iterate_is_altitude_outer_inclination_inner() {
    let orbit = Orbit {
        orbit_type: Some(OrbitType::Circular),
        altitude: Some(Rangeable::List(vec![
            Length::from_km(500.0),
            Length::from_km(600.0),
        ])),
        inclination: Some(Rangeable::List(vec![
            Inclination::degrees(30.0),
            Inclination::degrees(60.0),
        ])),
        ..Default::default()
    };

    let pairs: Vec<(f64, f64)> = orbit
        .iterate()
        .map(|o| (o.altitude_value().unwrap().to_km(), inclination_degrees(&o)))
        .collect();

    assert_eq!(
        pairs,
        vec![(500.0, 30.0), (500.0, 60.0), (600.0, 30.0), (600.0, 60.0)]
    );
}

#[test]
fn iterate_resolves_sso_per_altitude() {
    let orbit = Orbit::decode(json!({
        "orbitType": "SUN_SYNCHRONOUS",
        "altitude": {"minValue": 500, "maxValue": 700, "stepSize": 100}
    }))
    .unwrap();

    let orbits: Vec<Orbit> = orbit.iterate().collect();

    assert_eq!(orbits.len(), 3);
    assert_relative_eq!(inclination_degrees(&orbits[0]), 97.40, epsilon = 0.01);
    assert_relative_eq!(inclination_degrees(&orbits[1]), 97.79, epsilon = 0.01);
    assert!(orbits.iter().all(|o| o.eccentricity == Some(0.0)));
}

#[test]
fn iterate_ranges_inclination() {
    let orbit = Orbit {
        altitude: Some(Rangeable::Single(Length::from_km(550.0))),
        inclination: Some(Rangeable::Range(
            QuantitativeRange::new(0.0, 90.0).with_number_steps(4),
        )),
        ..Default::default()
    };

    let inclinations: Vec<f64> = orbit.iterate().map(|o| inclination_degrees(&o)).collect();
    assert_eq!(inclinations, vec![0.0, 30.0, 60.0, 90.0]);
}

#[test]
fn iterate_without_ranged_fields_yields_one_orbit() {
    let orbit = Orbit {
        id: Some("base".to_string()),
        epoch: Some("2017-08-01T00:00:00Z".to_string()),
        ..Default::default()
    };

    let orbits: Vec<Orbit> = orbit.iterate().collect();

    assert_eq!(orbits.len(), 1);
    assert_eq!(orbits[0].id, None);
    assert_eq!(orbits[0].epoch.as_deref(), Some("2017-08-01T00:00:00Z"));
}

#[test]
fn encoded_orbit_has_no_nulls() {
    let orbit = Orbit::sun_synchronous(Length::from_km(705.0));
    let doc = orbit.encode().unwrap();

    assert_eq!(doc["@type"], "Orbit");
    assert_eq!(doc["orbitType"], "SUN_SYNCHRONOUS");
    assert_eq!(doc["altitude"], 705.0);
    assert!(doc.get("trueAnomaly").is_none());
    assert!(!orbit.to_json().unwrap().contains("null"));

    let decoded = Orbit::decode(doc).unwrap();
    assert_eq!(decoded.altitude_value(), Some(Length::from_km(705.0)));
    assert_relative_eq!(
        inclination_degrees(&decoded),
        inclination_degrees(&orbit)
    );
}

#[test]
fn circular_orbit_keeps_given_inclination() {
    let orbit = Orbit::circular(Length::from_km(400.0), Angle::from_degrees(51.6));
    assert_eq!(orbit.eccentricity, Some(0.0));
    assert_relative_eq!(inclination_degrees(&orbit), 51.6);
}

#[test]
fn populated_orbit_survives_round_trip() {
    let orbit = Orbit {
        id: Some("orbit-1".to_string()),
        orbit_type: Some(OrbitType::Keplerian),
        altitude: Some(Rangeable::Single(Length::from_km(705.0))),
        inclination: Some(Rangeable::Single(Inclination::degrees(98.2))),
        semimajor_axis: Some(Length::from_km(7083.14)),
        eccentricity: Some(0.0012),
        periapsis_argument: Some(Angle::from_degrees(90.0)),
        right_ascension_ascending_node: Some(Angle::from_degrees(45.0)),
        true_anomaly: Some(Angle::from_degrees(30.0)),
        epoch: Some("2019-08-01T00:00:00Z".to_string()),
        local_solar_time_ascending_node: Some("PT10H".to_string()),
        ..Default::default()
    };

    let doc = orbit.encode().unwrap();
    let decoded = Orbit::decode(doc.clone()).unwrap();

    assert_eq!(decoded.id.as_deref(), Some("orbit-1"));
    assert_eq!(decoded.orbit_type, Some(OrbitType::Keplerian));
    assert_eq!(decoded.altitude_value(), Some(Length::from_km(705.0)));
    assert_eq!(decoded.inclination_value(), Some(Inclination::degrees(98.2)));
    assert_eq!(decoded.semimajor_axis, Some(Length::from_km(7083.14)));
    assert_eq!(decoded.eccentricity, Some(0.0012));
    assert_eq!(decoded.periapsis_argument, Some(Angle::from_degrees(90.0)));
    assert_eq!(
        decoded.right_ascension_ascending_node,
        Some(Angle::from_degrees(45.0))
    );
    assert_eq!(decoded.true_anomaly, Some(Angle::from_degrees(30.0)));
    assert_eq!(decoded.epoch.as_deref(), Some("2019-08-01T00:00:00Z"));
    assert_eq!(decoded.local_solar_time_ascending_node.as_deref(), Some("PT10H"));
    assert_eq!(decoded.encode().unwrap(), doc);
}
