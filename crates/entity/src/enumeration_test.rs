use serde::Deserialize;
use serde_json::json;

use crate::band::CommunicationBand;
use crate::enumeration::{Enumeration, Unmatched, lenient};

#[derive(Debug, Deserialize)]
struct Radio {
    #[serde(default, deserialize_with = "lenient::option")]
    primary: Option<CommunicationBand>,
    #[serde(default, deserialize_with = "lenient::list")]
    bands: Vec<CommunicationBand>,
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(CommunicationBand::parse("ka"), Ok(CommunicationBand::Ka));
    assert_eq!(CommunicationBand::parse("Laser"), Ok(CommunicationBand::Laser));
    assert_eq!("x".parse::<CommunicationBand>(), Ok(CommunicationBand::X));
}

#[test]
fn parse_reports_unmatched_values() {
    assert_eq!(
        CommunicationBand::parse("W"),
        Err(Unmatched {
            enumeration: "communication band",
            value: "W".to_string(),
        })
    );
}

#[test]
fn parse_list_maps_each_element() {
    let parsed = CommunicationBand::parse_list(&["s", "bogus", "KU"]);
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0], Ok(CommunicationBand::S));
    assert!(parsed[1].is_err());
    assert_eq!(parsed[2], Ok(CommunicationBand::Ku));
}

#[test]
fn members_serialize_upper_case() {
    assert_eq!(
        serde_json::to_value(CommunicationBand::Ku).unwrap(),
        json!("KU")
    );
    assert_eq!(CommunicationBand::Laser.to_string(), "LASER");
}

#[test]
fn strict_deserialization_rejects_unknown_values() {
    assert!(serde_json::from_value::<CommunicationBand>(json!("W")).is_err());
    assert_eq!(
        serde_json::from_value::<CommunicationBand>(json!("uhf")).unwrap(),
        CommunicationBand::UHF
    );
}

#[test]
fn lenient_fields_drop_unmatched_values() {
    let radio: Radio = serde_json::from_value(json!({
        "primary": "W",
        "bands": ["x", "W", "S"]
    }))
    .unwrap();

    assert_eq!(radio.primary, None);
    assert_eq!(radio.bands, vec![CommunicationBand::X, CommunicationBand::S]);
}

#[test]
fn lenient_list_accepts_a_single_value() {
    let radio: Radio = serde_json::from_value(json!({"bands": "vhf"})).unwrap();
    assert_eq!(radio.bands, vec![CommunicationBand::VHF]);
}

#[test]
fn lenient_fields_ignore_non_string_values() {
    let radio: Radio = serde_json::from_value(json!({
        "primary": 5,
        "bands": ["x", 7, {"band": "S"}, null]
    }))
    .unwrap();

    assert_eq!(radio.primary, None);
    assert_eq!(radio.bands, vec![CommunicationBand::X]);

    let radio: Radio = serde_json::from_value(json!({"primary": null, "bands": true})).unwrap();
    assert_eq!(radio.primary, None);
    assert!(radio.bands.is_empty());
}
