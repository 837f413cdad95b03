use serde_json::json;

use crate::registry::{AnyEntity, Decoded, decode, from_json, registered_types};

#[test]
fn tagged_documents_dispatch_by_type() {
    let decoded = decode(json!({
        "@type": "Orbit",
        "orbitType": "SUN_SYNCHRONOUS",
        "altitude": 705
    }))
    .unwrap();

    let Decoded::Entity(AnyEntity::Orbit(orbit)) = &decoded else {
        panic!("expected an orbit, got {:?}", decoded);
    };
    assert!(orbit.inclination_value().is_some());
}

#[test]
fn instrument_kinds_share_one_variant() {
    for tag in ["Instrument", "OpticalScanner", "SyntheticApertureRadar"] {
        let decoded = decode(json!({"@type": tag})).unwrap();
        let entity = decoded.as_entity().unwrap();
        assert!(matches!(entity, AnyEntity::Instrument(_)));
        assert_eq!(entity.type_name(), tag);
    }
}

#[test]
fn lists_decode_element_wise() {
    let decoded = decode(json!([
        {"@type": "GroundStation", "@id": "gs-1"},
        {"@type": "Agency", "agencyType": "ACADEMIC"},
        42
    ]))
    .unwrap();

    let Decoded::List(items) = decoded else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_entity().and_then(AnyEntity::id), Some("gs-1"));
    assert!(matches!(items[1], Decoded::Entity(AnyEntity::Agency(_))));
    assert!(matches!(&items[2], Decoded::Document(value) if value == &json!(42)));
}

#[test]
fn unknown_and_untagged_documents_pass_through() {
    let unknown = json!({"@type": "Spaceport", "name": "Kourou"});
    assert!(matches!(
        decode(unknown.clone()).unwrap(),
        Decoded::Document(doc) if doc == unknown
    ));

    let untagged = json!({"name": "Kourou"});
    assert!(matches!(
        decode(untagged.clone()).unwrap(),
        Decoded::Document(doc) if doc == untagged
    ));

    assert!(matches!(decode(json!("text")).unwrap(), Decoded::Document(_)));
}

#[test]
fn decoding_is_idempotent() {
    let decoded = decode(json!({"@type": "Region", "latitude": 10})).unwrap();
    let before = decoded.encode().unwrap();
    let again = decoded.decode().unwrap();
    assert_eq!(again.encode().unwrap(), before);
}

#[test]
fn malformed_entities_are_errors() {
    assert!(decode(json!({"@type": "Satellite", "mass": "heavy"})).is_err());
    assert!(from_json("{not json").is_err());
}

#[test]
fn every_entity_kind_is_registered() {
    let types = registered_types();
    for tag in [
        "Agency",
        "Architecture",
        "Constellation",
        "DesignSpace",
        "GroundNetwork",
        "GroundStation",
        "LaunchVehicle",
        "MissionConcept",
        "Orbit",
        "QuantitativeRange",
        "Region",
        "Satellite",
        "TradespaceSearch",
    ] {
        assert!(types.contains(&tag), "{tag} is not registered");
    }
}
