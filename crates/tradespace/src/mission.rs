use entity::{Agency, Entity, EntityType, IsoDuration, TypeTag, duration, lenient, one_or_many};
use ground::Region;
use serde::{Deserialize, Serialize};

entity::enumeration! {
    /// Direction in which an objective is optimized
    pub enum ObjectiveType as "objective type" {
        Maximize => "MAX",
        Minimize => "MIN",
        Target => "TAR",
    }
}

/// Top-level functional description of an Earth-observing mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionConcept {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<MissionConcept>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
    /// Mission start (ISO 8601 date-time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Mission end (ISO 8601 date-time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// A bare number in a document is days.
    #[serde(
        default,
        deserialize_with = "duration::days",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Region>,
    /// Objects of interest, e.g. `SUN` or `MOON`
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub objects: Vec<String>,
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub objectives: Vec<MissionObjective>,
}

impl MissionConcept {
    /// Acronym, falling back to the full name.
    pub fn short_name(&self) -> Option<&str> {
        self.acronym.as_deref().or(self.name.as_deref())
    }
}

impl EntityType for MissionConcept {
    const TYPE: &'static str = "MissionConcept";
}

impl Entity for MissionConcept {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(MissionConcept);

/// A quantity to maximize, minimize or hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionObjective {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<MissionObjective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the parent objective
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Relative importance, from 0 upward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub objective_type: Option<ObjectiveType>,
    /// Value to hit; only meaningful for [`ObjectiveType::Target`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl EntityType for MissionObjective {
    const TYPE: &'static str = "MissionObjective";
}

impl Entity for MissionObjective {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(MissionObjective);
