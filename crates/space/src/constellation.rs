//! Constellations and the Walker-Delta generator
//!
//! A [`Constellation`] in a design space describes candidate satellite counts,
//! plane counts, phasing factors and orbits. [`Constellation::iterate`] expands
//! those into single-valued configurations, and
//! [`Constellation::generate_constellations`] populates each configuration with
//! copies of the available satellite templates flying synthesized orbits.

use entity::{
    CombinationsWithReplacement, Entity, EntityType, Error, IsoDuration, OneOrMany, Rangeable,
    Result, TypeTag, axis, duration, lenient, one_or_many_option,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use units::Angle;

use crate::orbit::{Orbit, OrbitType, semimajor_axis};
use crate::satellite::Satellite;

entity::enumeration! {
    /// Arrangement of member satellites
    pub enum ConstellationType as "constellation type" {
        DeltaHomogenous => "DELTA_HOMOGENOUS",
        DeltaHeterogeneous => "DELTA_HETEROGENEOUS",
        Precessing => "PRECESSING",
        AdHoc => "AD_HOC",
        Train => "TRAIN",
    }
}

impl ConstellationType {
    /// Walker-Delta arrangements (homogeneous or heterogeneous)
    pub fn is_delta(&self) -> bool {
        matches!(
            self,
            ConstellationType::DeltaHomogenous | ConstellationType::DeltaHeterogeneous
        )
    }
}

/// A set of satellites sharing an orbital pattern.
///
/// `number_satellites`, `number_planes`, `relative_spacing` and
/// `satellite_interval` may hold several candidate values, and `orbit` may list
/// several candidate orbits. Once `satellites` is bound the constellation is
/// concrete and is no longer expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ConstellationDocument")]
pub struct Constellation {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type")]
    pub type_tag: TypeTag<Constellation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constellation_type: Option<ConstellationType>,
    pub number_satellites: Rangeable<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_planes: Option<Rangeable<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_spacing: Option<Rangeable<u32>>,
    /// Local time between satellites of a train (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satellite_interval: Option<Rangeable<IsoDuration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OneOrMany<Orbit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satellites: Option<Vec<Satellite>>,
}

fn default_number_satellites() -> Rangeable<u32> {
    Rangeable::Single(1)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConstellationDocument {
    #[serde(rename = "@id", default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    constellation_type: Option<ConstellationType>,
    #[serde(default = "default_number_satellites")]
    number_satellites: Rangeable<u32>,
    #[serde(default)]
    number_planes: Option<Rangeable<u32>>,
    #[serde(default)]
    relative_spacing: Option<Rangeable<u32>>,
    #[serde(default, deserialize_with = "duration::interval")]
    satellite_interval: Option<Rangeable<IsoDuration>>,
    #[serde(default)]
    orbit: Option<OneOrMany<Orbit>>,
    #[serde(default, deserialize_with = "one_or_many_option")]
    satellites: Option<Vec<Satellite>>,
}

impl From<ConstellationDocument> for Constellation {
    fn from(doc: ConstellationDocument) -> Self {
        Constellation {
            id: doc.id,
            type_tag: TypeTag::new(),
            constellation_type: doc.constellation_type,
            number_satellites: doc.number_satellites,
            number_planes: doc.number_planes,
            relative_spacing: doc.relative_spacing,
            satellite_interval: doc.satellite_interval,
            orbit: doc.orbit,
            satellites: doc.satellites,
        }
        .with_defaults()
    }
}

impl Default for Constellation {
    fn default() -> Self {
        Self {
            id: None,
            type_tag: TypeTag::new(),
            constellation_type: None,
            number_satellites: default_number_satellites(),
            number_planes: None,
            relative_spacing: None,
            satellite_interval: None,
            orbit: None,
            satellites: None,
        }
    }
}

/// One filtered point of the parameter product (orbit excluded).
struct Parameters {
    number_satellites: u32,
    number_planes: Option<u32>,
    relative_spacing: Option<u32>,
    satellite_interval: Option<IsoDuration>,
}

impl Parameters {
    fn is_valid(&self) -> bool {
        self.number_planes.is_none_or(|planes| {
            planes <= self.number_satellites
                && self.relative_spacing.is_none_or(|spacing| spacing < planes)
        })
    }
}

fn invalid(message: &str) -> Error {
    Error::Invalid {
        entity: Constellation::TYPE,
        message: message.to_string(),
    }
}

impl Constellation {
    /// Applies the Walker-Delta defaults.
    ///
    /// Delta constellations default to one plane. With a single plane count,
    /// the relative spacing defaults to 1 for a multi-plane sun-synchronous
    /// orbit and to 0 otherwise.
    pub fn with_defaults(mut self) -> Self {
        if !self.constellation_type.is_some_and(|kind| kind.is_delta()) {
            return self;
        }

        let planes = self
            .number_planes
            .get_or_insert(Rangeable::Single(1))
            .as_single();
        if let (None, Some(planes)) = (&self.relative_spacing, planes) {
            let sun_synchronous = self
                .orbit
                .as_ref()
                .and_then(OneOrMany::as_single)
                .is_some_and(Orbit::is_sun_synchronous);
            let spacing = if sun_synchronous && planes > 1 { 1 } else { 0 };
            self.relative_spacing = Some(Rangeable::Single(spacing));
        }
        self
    }

    /// Single-valued configurations in lexicographic order.
    ///
    /// Combinations violating `numberPlanes ≤ numberSatellites` or
    /// `relativeSpacing < numberPlanes` are skipped. A constellation with bound
    /// satellites yields only itself.
    pub fn iterate(&self) -> Box<dyn Iterator<Item = Constellation> + '_> {
        if self.satellites.is_some() {
            return Box::new(std::iter::once(self.clone()));
        }

        let planes = axis(&self.number_planes);
        let spacings = axis(&self.relative_spacing);
        let intervals = axis(&self.satellite_interval);

        let mut parameters = Vec::new();
        for number_satellites in self.number_satellites.values() {
            for &number_planes in &planes {
                for &relative_spacing in &spacings {
                    for satellite_interval in &intervals {
                        let candidate = Parameters {
                            number_satellites,
                            number_planes,
                            relative_spacing,
                            satellite_interval: satellite_interval.clone(),
                        };
                        if candidate.is_valid() {
                            parameters.push(candidate);
                        }
                    }
                }
            }
        }

        let orbits: Vec<Option<Orbit>> = match &self.orbit {
            Some(orbits) => orbits.iter().flat_map(Orbit::iterate).map(Some).collect(),
            None => vec![None],
        };

        Box::new(parameters.into_iter().flat_map(move |parameters| {
            orbits
                .clone()
                .into_iter()
                .map(move |orbit| self.configure(&parameters, orbit))
        }))
    }

    fn configure(&self, parameters: &Parameters, orbit: Option<Orbit>) -> Constellation {
        Constellation {
            id: None,
            type_tag: TypeTag::new(),
            constellation_type: self.constellation_type,
            number_satellites: Rangeable::Single(parameters.number_satellites),
            number_planes: parameters.number_planes.map(Rangeable::Single),
            relative_spacing: parameters.relative_spacing.map(Rangeable::Single),
            satellite_interval: parameters.satellite_interval.clone().map(Rangeable::Single),
            orbit: orbit.map(OneOrMany::One),
            satellites: None,
        }
        .with_defaults()
    }

    /// Synthesizes one Keplerian orbit per member of a Walker-Delta pattern.
    ///
    /// Requires single values for the satellite count `N`, plane count `P` and
    /// relative spacing `F` (absent means 0), and one base orbit with a single
    /// altitude. With `S = ceil(N / P)` satellites per plane, satellite `s` sits
    /// in plane `p = s / S` at RAAN `p·360/P` and true anomaly
    /// `((s mod S)·P + F·p)·360/(S·P)`. Inclination, eccentricity and periapsis
    /// argument come from the base orbit.
    pub fn generate_delta_orbits(&self) -> Result<Vec<Orbit>> {
        let satellites = self
            .number_satellites
            .as_single()
            .ok_or_else(|| invalid("numberSatellites must be a single value"))?;
        if satellites == 0 {
            return Ok(Vec::new());
        }

        let planes = self
            .number_planes
            .as_ref()
            .ok_or(Error::MissingField {
                entity: Constellation::TYPE,
                field: "numberPlanes",
            })?
            .as_single()
            .ok_or_else(|| invalid("numberPlanes must be a single value"))?;
        if planes == 0 {
            return Err(invalid("numberPlanes must be positive"));
        }

        let spacing = match &self.relative_spacing {
            Some(spacing) => spacing
                .as_single()
                .ok_or_else(|| invalid("relativeSpacing must be a single value"))?,
            None => 0,
        };

        let base = self
            .orbit
            .as_ref()
            .ok_or(Error::MissingField {
                entity: Constellation::TYPE,
                field: "orbit",
            })?
            .as_single()
            .ok_or_else(|| invalid("a single base orbit is required"))?;
        let altitude = base
            .altitude_value()
            .ok_or_else(|| invalid("the base orbit needs a single altitude"))?;

        let per_plane = satellites.div_ceil(planes);
        let slots = f64::from(per_plane) * f64::from(planes);

        Ok((0..satellites)
            .map(|satellite| {
                let plane = satellite / per_plane;
                let raan = f64::from(plane) * 360.0 / f64::from(planes);
                let phase = f64::from(satellite % per_plane) * f64::from(planes)
                    + f64::from(spacing) * f64::from(plane);
                Orbit {
                    orbit_type: Some(OrbitType::Keplerian),
                    inclination: base.inclination.clone(),
                    semimajor_axis: Some(semimajor_axis(altitude)),
                    eccentricity: base.eccentricity,
                    periapsis_argument: base.periapsis_argument,
                    right_ascension_ascending_node: Some(Angle::from_degrees(raan)),
                    true_anomaly: Some(Angle::from_degrees(phase * 360.0 / slots)),
                    ..Default::default()
                }
                .normalized()
            })
            .collect())
    }

    /// Populates every configuration with copies of the satellite templates.
    ///
    /// - `DELTA_HOMOGENOUS`: per configuration (outer) and template (inner),
    ///   one constellation of `N` copies of that template
    /// - `DELTA_HETEROGENEOUS`: per configuration, one constellation per
    ///   multiset of `N` templates
    ///
    /// Each member gets its own synthesized orbit. Every configuration is
    /// validated before the first constellation is yielded; other constellation
    /// types fail with [`Error::UnsupportedConstellationType`]. A constellation
    /// with bound satellites yields itself.
    pub fn generate_constellations<'a>(
        &'a self,
        satellites: &'a [Satellite],
    ) -> Result<Box<dyn Iterator<Item = Constellation> + 'a>> {
        if self.satellites.is_some() {
            return Ok(Box::new(std::iter::once(self.clone())));
        }

        let kind = match self.constellation_type {
            Some(kind) if kind.is_delta() => kind,
            Some(kind) => return Err(Error::UnsupportedConstellationType(kind.to_string())),
            None => {
                return Err(Error::UnsupportedConstellationType(
                    "unspecified".to_string(),
                ));
            }
        };

        let configurations = self
            .iterate()
            .map(|configuration| -> Result<(Constellation, Vec<Orbit>)> {
                let orbits = configuration.generate_delta_orbits()?;
                Ok((configuration, orbits))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            constellation_type = %kind,
            configurations = configurations.len(),
            templates = satellites.len(),
            "constellation configurations expanded"
        );

        if kind == ConstellationType::DeltaHomogenous {
            Ok(Box::new(configurations.into_iter().flat_map(
                move |(configuration, orbits)| {
                    satellites.iter().map(move |template| {
                        let members = orbits
                            .iter()
                            .map(|orbit| template.with_orbit(orbit.clone()))
                            .collect();
                        configuration.bind(members)
                    })
                },
            )))
        } else {
            Ok(Box::new(configurations.into_iter().flat_map(
                move |(configuration, orbits)| {
                    CombinationsWithReplacement::new(satellites.len(), orbits.len()).map(
                        move |picks| {
                            let members = picks
                                .iter()
                                .zip(&orbits)
                                .map(|(&pick, orbit)| satellites[pick].with_orbit(orbit.clone()))
                                .collect();
                            configuration.bind(members)
                        },
                    )
                },
            )))
        }
    }

    /// A concrete copy of this configuration with the given members.
    pub fn bind(&self, satellites: Vec<Satellite>) -> Constellation {
        Constellation {
            id: None,
            satellites: Some(satellites),
            ..self.clone()
        }
    }
}

impl EntityType for Constellation {
    const TYPE: &'static str = "Constellation";
}

impl Entity for Constellation {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(Constellation);
