//! Design spaces and architecture enumeration

use entity::{Entity, EntityType, Result, TypeTag, one_or_many};
use ground::{GroundNetwork, GroundStation};
use serde::{Deserialize, Serialize};
use space::{Constellation, LaunchVehicle, Satellite};
use tracing::{debug, warn};

use crate::architecture::Architectures;

/// The fixed and variable quantities of a mission.
///
/// Every list also accepts a single element in a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSpace {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<DesignSpace>,
    /// Candidate constellations
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub constellations: Vec<Constellation>,
    /// Available launch vehicles
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub launchers: Vec<LaunchVehicle>,
    /// Satellite templates flown by generated constellations
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub satellites: Vec<Satellite>,
    /// Candidate ground networks
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ground_networks: Vec<GroundNetwork>,
    /// Stations available to generated networks
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ground_stations: Vec<GroundStation>,
}

impl DesignSpace {
    /// Every architecture of this design space.
    ///
    /// Constellations are generated from each configured entry in order and
    /// paired with every generated ground network, constellation outer.
    /// Configuration errors from any entry are returned here, before the
    /// first architecture is produced.
    pub fn generate_architectures(&self) -> Result<Architectures<'_>> {
        let constellations = self
            .constellations
            .iter()
            .map(|constellation| constellation.generate_constellations(&self.satellites))
            .collect::<Result<Vec<_>>>()?;

        let mut networks = Vec::new();
        for network in &self.ground_networks {
            networks.extend(network.generate_networks(&self.ground_stations)?);
        }

        if self.constellations.is_empty() {
            warn!("design space has no constellations; no architectures will be generated");
        }
        if networks.is_empty() {
            warn!("design space yields no ground networks; no architectures will be generated");
        }
        debug!(
            constellations = self.constellations.len(),
            satellites = self.satellites.len(),
            networks = networks.len(),
            "architecture enumeration prepared"
        );

        Ok(Architectures::new(
            Box::new(constellations.into_iter().flatten()),
            networks,
        ))
    }
}

impl EntityType for DesignSpace {
    const TYPE: &'static str = "DesignSpace";
}

impl Entity for DesignSpace {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(DesignSpace);
