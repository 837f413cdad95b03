//! Orbital trajectories about the Earth
//!
//! An [`Orbit`] in a design space may carry several candidate altitudes and
//! inclinations. [`Orbit::iterate`] expands those into concrete orbits, one per
//! altitude × inclination pair.

use std::f64::consts::PI;

use entity::{Entity, EntityType, Rangeable, RangeValue, TypeTag, axis, lenient};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use units::{Angle, Length, Time};

use crate::constants::{MU_EARTH, R_EARTH, SSO_COEFFICIENT};

/// Document spelling of the sun-synchronous inclination sentinel
pub const SSO: &str = "SSO";

entity::enumeration! {
    /// Shape of an orbit
    pub enum OrbitType as "orbit type" {
        Keplerian => "KEPLERIAN",
        Circular => "CIRCULAR",
        SunSynchronous => "SUN_SYNCHRONOUS",
    }
}

/// Orbit inclination: an angle, or the sentinel resolved from altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inclination {
    Degrees(Angle),
    SunSynchronous,
}

impl Inclination {
    pub fn degrees(value: f64) -> Self {
        Inclination::Degrees(Angle::from_degrees(value))
    }

    pub fn angle(&self) -> Option<Angle> {
        match self {
            Inclination::Degrees(angle) => Some(*angle),
            Inclination::SunSynchronous => None,
        }
    }
}

impl RangeValue for Inclination {
    fn from_f64(value: f64) -> Self {
        Inclination::degrees(value)
    }
}

impl Serialize for Inclination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Inclination::Degrees(angle) => angle.serialize(serializer),
            Inclination::SunSynchronous => serializer.serialize_str(SSO),
        }
    }
}

impl<'de> Deserialize<'de> for Inclination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Degrees(f64),
            Sentinel(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Degrees(value) => Ok(Inclination::degrees(value)),
            Raw::Sentinel(text) if text.eq_ignore_ascii_case(SSO) => Ok(Inclination::SunSynchronous),
            Raw::Sentinel(text) => Err(serde::de::Error::custom(format!(
                "unrecognized inclination `{text}`"
            ))),
        }
    }
}

/// An orbital trajectory about the Earth.
///
/// Decoding applies the construction defaults (see [`Orbit::normalized`]),
/// so an orbit read from a document already satisfies them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OrbitDocument")]
pub struct Orbit {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type")]
    pub type_tag: TypeTag<Orbit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit_type: Option<OrbitType>,
    /// Mean altitude above sea level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Rangeable<Length>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclination: Option<Rangeable<Inclination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semimajor_axis: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periapsis_argument: Option<Angle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_ascension_ascending_node: Option<Angle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_anomaly: Option<Angle>,
    /// Reference time of the orbital elements (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,
    /// Local solar time at the ascending node (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_solar_time_ascending_node: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrbitDocument {
    #[serde(rename = "@id", default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    orbit_type: Option<OrbitType>,
    #[serde(default)]
    altitude: Option<Rangeable<Length>>,
    #[serde(default)]
    inclination: Option<Rangeable<Inclination>>,
    #[serde(default)]
    semimajor_axis: Option<Length>,
    #[serde(default)]
    eccentricity: Option<f64>,
    #[serde(default)]
    periapsis_argument: Option<Angle>,
    #[serde(default)]
    right_ascension_ascending_node: Option<Angle>,
    #[serde(default)]
    true_anomaly: Option<Angle>,
    #[serde(default)]
    epoch: Option<String>,
    #[serde(default)]
    local_solar_time_ascending_node: Option<String>,
}

impl From<OrbitDocument> for Orbit {
    fn from(doc: OrbitDocument) -> Self {
        Orbit {
            id: doc.id,
            type_tag: TypeTag::new(),
            orbit_type: doc.orbit_type,
            altitude: doc.altitude,
            inclination: doc.inclination,
            semimajor_axis: doc.semimajor_axis,
            eccentricity: doc.eccentricity,
            periapsis_argument: doc.periapsis_argument,
            right_ascension_ascending_node: doc.right_ascension_ascending_node,
            true_anomaly: doc.true_anomaly,
            epoch: doc.epoch,
            local_solar_time_ascending_node: doc.local_solar_time_ascending_node,
        }
        .normalized()
    }
}

impl Orbit {
    /// A sun-synchronous orbit at a single altitude, inclination resolved.
    pub fn sun_synchronous(altitude: Length) -> Self {
        Orbit {
            orbit_type: Some(OrbitType::SunSynchronous),
            altitude: Some(Rangeable::Single(altitude)),
            ..Default::default()
        }
        .normalized()
    }

    /// A circular orbit at a single altitude and inclination.
    pub fn circular(altitude: Length, inclination: Angle) -> Self {
        Orbit {
            orbit_type: Some(OrbitType::Circular),
            altitude: Some(Rangeable::Single(altitude)),
            inclination: Some(Rangeable::Single(Inclination::Degrees(inclination))),
            ..Default::default()
        }
        .normalized()
    }

    /// Applies the construction defaults.
    ///
    /// - circular and sun-synchronous orbits have zero eccentricity
    /// - Keplerian orbits default eccentricity and periapsis argument to zero
    /// - a sun-synchronous orbit (by type or by the `SSO` inclination sentinel)
    ///   with a single altitude gets its inclination from that altitude
    pub fn normalized(mut self) -> Self {
        let resolved = self
            .altitude_value()
            .filter(|_| self.is_sun_synchronous())
            .map(sun_synchronous_inclination);
        if let Some(inclination) = resolved {
            self.inclination = Some(Rangeable::Single(Inclination::Degrees(inclination)));
        }

        match self.orbit_type {
            Some(OrbitType::Circular | OrbitType::SunSynchronous) => {
                self.eccentricity = Some(0.0);
            }
            Some(OrbitType::Keplerian) => {
                self.eccentricity.get_or_insert(0.0);
                self.periapsis_argument.get_or_insert(Angle::zero());
            }
            None => {}
        }
        self
    }

    /// The altitude when exactly one is configured.
    pub fn altitude_value(&self) -> Option<Length> {
        self.altitude.as_ref().and_then(Rangeable::as_single)
    }

    /// The inclination when exactly one is configured.
    pub fn inclination_value(&self) -> Option<Inclination> {
        self.inclination.as_ref().and_then(Rangeable::as_single)
    }

    fn has_sso_sentinel(&self) -> bool {
        matches!(
            self.inclination,
            Some(Rangeable::Single(Inclination::SunSynchronous))
        )
    }

    /// Sun-synchronous by type, or by an unresolved `SSO` inclination.
    pub fn is_sun_synchronous(&self) -> bool {
        self.orbit_type == Some(OrbitType::SunSynchronous) || self.has_sso_sentinel()
    }

    /// Concrete orbits, altitude outer and inclination inner.
    ///
    /// Each result has a single altitude and inclination and passes through
    /// [`Orbit::normalized`], so `SSO` resolves per altitude.
    pub fn iterate(&self) -> impl Iterator<Item = Orbit> + '_ {
        let inclinations = axis(&self.inclination);
        axis(&self.altitude)
            .into_iter()
            .flat_map(move |altitude| {
                inclinations.clone().into_iter().map(move |inclination| {
                    Orbit {
                        id: None,
                        altitude: altitude.map(Rangeable::Single),
                        inclination: inclination.map(Rangeable::Single),
                        ..self.clone()
                    }
                    .normalized()
                })
            })
    }
}

impl EntityType for Orbit {
    const TYPE: &'static str = "Orbit";
}

impl Entity for Orbit {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(Orbit);

/// Semi-major axis of a circular orbit at the given altitude.
pub fn semimajor_axis(altitude: Length) -> Length {
    Length::from_km(R_EARTH) + altitude
}

/// Orbital period of a circular orbit at the given altitude.
pub fn orbital_period(altitude: Length) -> Time {
    let sma = semimajor_axis(altitude);
    Time::from_seconds(2.0 * PI * (sma.powi(3) / MU_EARTH).sqrt())
}

/// Inclination that makes an orbit at the given altitude sun-synchronous.
///
/// ```
/// use space::orbit::sun_synchronous_inclination;
/// use units::Length;
///
/// let inclination = sun_synchronous_inclination(Length::from_km(705.0));
/// assert!((inclination.to_degrees() - 98.2).abs() < 0.1);
/// ```
pub fn sun_synchronous_inclination(altitude: Length) -> Angle {
    let ratio = semimajor_axis(altitude).to_km() / R_EARTH;
    Angle::from_radians((-ratio.powf(3.5) / SSO_COEFFICIENT).acos())
}
