use entity::{CommunicationBand, Entity, EntityType, TypeTag, lenient, one_or_many};
use serde::{Deserialize, Serialize};

use crate::instrument::Instrument;
use crate::orbit::Orbit;

entity::enumeration! {
    /// Propulsion propellant
    pub enum PropellantType as "propellant type" {
        ColdGas => "COLD_GAS",
        Solid => "SOLID",
        LiquidMonoProp => "LIQUID_MONO_PROP",
        LiquidBiProp => "LIQUID_BI_PROP",
        Hybrid => "HYBRID",
        Electrothermal => "ELECTROTHERMAL",
        Electrostatic => "ELECTROSTATIC",
        MonoProp => "MONO_PROP",
    }
}

entity::enumeration! {
    /// Attitude stabilization scheme
    pub enum StabilizationType as "stabilization type" {
        Axis3 => "AXIS_3",
        Spinning => "SPINNING",
        GravityGradient => "GRAVITY_GRADIENT",
    }
}

fn default_tech_readiness_level() -> u8 {
    9
}

fn default_true() -> bool {
    true
}

fn default_propellant_type() -> Option<PropellantType> {
    Some(PropellantType::MonoProp)
}

fn default_stabilization_type() -> Option<StabilizationType> {
    Some(StabilizationType::Axis3)
}

/// A spacecraft orbiting the Earth in support of mission objectives.
///
/// In a design space a satellite is a template: each generated constellation
/// member is an independent copy with its own orbit (see [`Satellite::with_orbit`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Satellite {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<Satellite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    /// Total mass including propellant (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    /// Total volume (m³)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Nominal operating power (W)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub comm_band: Vec<CommunicationBand>,
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub payload: Vec<Instrument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<Orbit>,
    #[serde(default = "default_tech_readiness_level")]
    pub tech_readiness_level: u8,
    #[serde(default = "default_true")]
    pub is_ground_command: bool,
    #[serde(default)]
    pub is_spare: bool,
    #[serde(
        default = "default_propellant_type",
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub propellant_type: Option<PropellantType>,
    #[serde(
        default = "default_stabilization_type",
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stabilization_type: Option<StabilizationType>,
}

impl Default for Satellite {
    fn default() -> Self {
        Self {
            id: None,
            type_tag: TypeTag::new(),
            name: None,
            acronym: None,
            mass: None,
            volume: None,
            power: None,
            comm_band: Vec::new(),
            payload: Vec::new(),
            orbit: None,
            tech_readiness_level: default_tech_readiness_level(),
            is_ground_command: true,
            is_spare: false,
            propellant_type: default_propellant_type(),
            stabilization_type: default_stabilization_type(),
        }
    }
}

impl Satellite {
    /// A copy of this template flying the given orbit.
    pub fn with_orbit(&self, orbit: Orbit) -> Satellite {
        Satellite {
            orbit: Some(orbit),
            ..self.clone()
        }
    }

    /// Acronym, falling back to the full name.
    pub fn short_name(&self) -> Option<&str> {
        self.acronym.as_deref().or(self.name.as_deref())
    }
}

impl EntityType for Satellite {
    const TYPE: &'static str = "Satellite";
}

impl Entity for Satellite {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(Satellite);
