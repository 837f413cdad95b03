use entity::{Agency, Entity, EntityType, IsoDuration, TypeTag, duration};
use serde::{Deserialize, Serialize};

/// A vehicle delivering satellites to orbit.
///
/// A numeric `meanTimeBetweenLaunches` in a document is days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchVehicle {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<LaunchVehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
    /// Maximum payload mass (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_mass: Option<f64>,
    /// Maximum payload volume (m³)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_volume: Option<f64>,
    /// Mass without propellant (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_mass: Option<f64>,
    /// Propellant capacity (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propellant_mass: Option<f64>,
    /// Specific impulse (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_impulse: Option<f64>,
    /// Mass deliverable to low Earth orbit (kg)
    #[serde(rename = "massToLEO", default, skip_serializing_if = "Option::is_none")]
    pub mass_to_leo: Option<f64>,
    /// Probability of launch success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
    /// Cost per launch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(
        default,
        deserialize_with = "duration::days",
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_time_between_launches: Option<IsoDuration>,
}

impl EntityType for LaunchVehicle {
    const TYPE: &'static str = "LaunchVehicle";
}

impl Entity for LaunchVehicle {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(LaunchVehicle);
