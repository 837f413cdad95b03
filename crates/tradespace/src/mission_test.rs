use entity::Entity;
use ground::Region;
use serde_json::json;

use crate::mission::{MissionConcept, MissionObjective, ObjectiveType};

#[test]
fn numeric_duration_is_days() {
    let mission = MissionConcept::decode(json!({"name": "Demo", "duration": 90})).unwrap();
    assert_eq!(mission.duration.unwrap().as_str(), "P90D");
}

#[test]
fn single_object_and_objective_become_lists() {
    let mission = MissionConcept::decode(json!({
        "objects": "MOON",
        "objectives": {"name": "Revisit", "type": "min", "weight": 2}
    }))
    .unwrap();

    assert_eq!(mission.objects, vec!["MOON".to_string()]);
    assert_eq!(mission.objectives.len(), 1);
    assert_eq!(
        mission.objectives[0].objective_type,
        Some(ObjectiveType::Minimize)
    );
    assert_eq!(mission.objectives[0].weight, Some(2.0));
}

#[test]
fn unknown_objective_type_is_unset() {
    let objective = MissionObjective::decode(json!({"type": "AVERAGE"})).unwrap();
    assert_eq!(objective.objective_type, None);
}

#[test]
fn objective_type_is_written_under_type() {
    let objective = MissionObjective {
        name: Some("Coverage".to_string()),
        objective_type: Some(ObjectiveType::Target),
        target: Some(0.95),
        ..Default::default()
    };
    let doc = objective.encode().unwrap();

    assert_eq!(doc["@type"], "MissionObjective");
    assert_eq!(doc["type"], "TAR");
    assert_eq!(doc["target"], 0.95);
}

#[test]
fn mission_short_name_prefers_acronym() {
    let mission = MissionConcept {
        name: Some("Sustainable Land Imaging".to_string()),
        acronym: Some("SLI".to_string()),
        target: Some(Region::global()),
        ..Default::default()
    };
    assert_eq!(mission.short_name(), Some("SLI"));

    let doc = mission.encode().unwrap();
    assert!(doc.get("objects").is_none());
    assert!(doc.get("objectives").is_none());
    assert_eq!(doc["target"]["@type"], "Region");
}
