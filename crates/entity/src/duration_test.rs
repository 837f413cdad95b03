use serde::Deserialize;
use serde_json::json;

use crate::duration::{self, IsoDuration};
use crate::range::Rangeable;

#[derive(Debug, Deserialize)]
struct Schedule {
    #[serde(default, deserialize_with = "duration::days")]
    duration: Option<IsoDuration>,
    #[serde(default, deserialize_with = "duration::minutes")]
    revisit: Option<IsoDuration>,
    #[serde(default, deserialize_with = "duration::interval")]
    interval: Option<Rangeable<IsoDuration>>,
}

#[test]
fn numeric_days_become_iso_durations() {
    let schedule: Schedule = serde_json::from_value(json!({"duration": 90})).unwrap();
    assert_eq!(schedule.duration, Some(IsoDuration::new("P90D")));
}

#[test]
fn numeric_minutes_become_iso_durations() {
    let schedule: Schedule = serde_json::from_value(json!({"revisit": 90})).unwrap();
    assert_eq!(schedule.revisit.unwrap().as_str(), "PT1H30M");
}

#[test]
fn duration_strings_are_kept_verbatim() {
    let schedule: Schedule = serde_json::from_value(json!({"duration": "P1Y"})).unwrap();
    assert_eq!(schedule.duration.unwrap().to_string(), "P1Y");
}

#[test]
fn interval_string_is_a_singleton() {
    let schedule: Schedule = serde_json::from_value(json!({"interval": "PT5M"})).unwrap();
    let values: Vec<IsoDuration> = schedule.interval.unwrap().values().collect();
    assert_eq!(values, vec![IsoDuration::new("PT5M")]);
}

#[test]
fn interval_list_mixes_numbers_and_strings() {
    let schedule: Schedule =
        serde_json::from_value(json!({"interval": [5, "PT10M"]})).unwrap();
    let values: Vec<String> = schedule
        .interval
        .unwrap()
        .values()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(values, vec!["PT5M", "PT10M"]);
}

#[test]
fn interval_range_samples_are_minutes() {
    let schedule: Schedule = serde_json::from_value(json!({
        "interval": {"minValue": 5, "maxValue": 15, "stepSize": 5}
    }))
    .unwrap();
    let values: Vec<String> = schedule
        .interval
        .unwrap()
        .values()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(values, vec!["PT5M", "PT10M", "PT15M"]);
}
