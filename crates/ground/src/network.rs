//! Ground networks and their generator
//!
//! A [`GroundNetwork`] in a design space names a candidate number of stations.
//! [`GroundNetwork::generate_networks`] turns each candidate into every
//! selection of that many compatible stations from the available pool.

use entity::{
    Agency, Combinations, Entity, EntityType, Error, Rangeable, Result, TypeTag,
    one_or_many_option,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::station::GroundStation;

/// A network of ground stations providing communication services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundNetwork {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<GroundNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_stations: Option<Rangeable<u32>>,
    #[serde(
        default,
        deserialize_with = "one_or_many_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ground_stations: Option<Vec<GroundStation>>,
}

impl GroundNetwork {
    /// One configuration per candidate station count.
    ///
    /// A network with bound stations yields only itself. A network without a
    /// station count yields itself unchanged.
    pub fn iterate(&self) -> Box<dyn Iterator<Item = GroundNetwork> + '_> {
        match (&self.ground_stations, &self.number_stations) {
            (None, Some(counts)) => Box::new(counts.values().map(move |count| GroundNetwork {
                id: None,
                type_tag: TypeTag::new(),
                name: self.name.clone(),
                acronym: self.acronym.clone(),
                agency: self.agency.clone(),
                number_stations: Some(Rangeable::Single(count)),
                ground_stations: None,
            })),
            _ => Box::new(std::iter::once(self.clone())),
        }
    }

    /// Whether a station may join this network.
    ///
    /// An unconstrained network (no agency) accepts every station; otherwise
    /// the station needs an agency of the same type.
    pub fn accepts(&self, station: &GroundStation) -> bool {
        match &self.agency {
            None => true,
            Some(agency) => station
                .agency
                .as_ref()
                .is_some_and(|own| own.agency_type == agency.agency_type),
        }
    }

    /// Every network of compatible stations drawn from `stations`.
    ///
    /// Per configuration, selections follow pool order (lexicographic
    /// combinations). A network with bound stations yields itself. Fails
    /// before yielding anything if a configuration has no station count.
    pub fn generate_networks<'a>(
        &'a self,
        stations: &'a [GroundStation],
    ) -> Result<Box<dyn Iterator<Item = GroundNetwork> + 'a>> {
        if self.ground_stations.is_some() {
            return Ok(Box::new(std::iter::once(self.clone())));
        }

        let configurations = self
            .iterate()
            .map(|configuration| -> Result<(GroundNetwork, usize)> {
                let count = configuration
                    .number_stations
                    .as_ref()
                    .and_then(Rangeable::as_single)
                    .ok_or(Error::MissingField {
                        entity: GroundNetwork::TYPE,
                        field: "numberStations",
                    })?;
                Ok((configuration, count as usize))
            })
            .collect::<Result<Vec<_>>>()?;

        let pool: Vec<&GroundStation> = stations
            .iter()
            .filter(|station| self.accepts(station))
            .collect();
        debug!(
            configurations = configurations.len(),
            stations = stations.len(),
            compatible = pool.len(),
            "ground network configurations expanded"
        );

        Ok(Box::new(configurations.into_iter().flat_map(
            move |(configuration, count)| {
                let pool = pool.clone();
                Combinations::new(pool.len(), count).map(move |picks| {
                    let members = picks.iter().map(|&pick| pool[pick].clone()).collect();
                    configuration.bind(members)
                })
            },
        )))
    }

    /// A concrete copy of this configuration with the given members.
    pub fn bind(&self, stations: Vec<GroundStation>) -> GroundNetwork {
        GroundNetwork {
            id: None,
            ground_stations: Some(stations),
            ..self.clone()
        }
    }

    /// Acronym, falling back to the full name.
    pub fn short_name(&self) -> Option<&str> {
        self.acronym.as_deref().or(self.name.as_deref())
    }
}

impl EntityType for GroundNetwork {
    const TYPE: &'static str = "GroundNetwork";
}

impl Entity for GroundNetwork {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(GroundNetwork);
