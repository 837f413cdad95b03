//! Untyped decoding by `@type` discriminator
//!
//! [`decode`] reads a document whose type is not known statically. Tagged
//! objects are dispatched through a registry of constructors keyed by their
//! `@type`; everything else passes through unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

use entity::{
    Agency, Document, Entity, EntityType, QuantitativeRange, QuantitativeValue, Result, type_of,
};
use ground::{GroundNetwork, GroundStation, Region};
use serde::Serialize;
use space::{Constellation, Instrument, LaunchVehicle, Orbit, Satellite, instrument_kinds};

use crate::architecture::Architecture;
use crate::design_space::DesignSpace;
use crate::mission::{MissionConcept, MissionObjective};
use crate::search::{AnalysisOutputs, AnalysisSettings, SearchParameters, TradespaceSearch};

macro_rules! any_entity {
    ($( $variant:ident($ty:ty) ),+ $(,)?) => {
        /// Any entity known to the registry.
        #[derive(Debug, Clone, Serialize)]
        #[serde(untagged)]
        pub enum AnyEntity {
            $( $variant($ty) ),+
        }

        $(
            impl From<$ty> for AnyEntity {
                fn from(entity: $ty) -> Self {
                    AnyEntity::$variant(entity)
                }
            }
        )+

        impl AnyEntity {
            pub fn id(&self) -> Option<&str> {
                match self {
                    $( AnyEntity::$variant(entity) => entity.id() ),+
                }
            }

            pub fn type_name(&self) -> &'static str {
                match self {
                    $( AnyEntity::$variant(entity) => entity.type_name() ),+
                }
            }

            pub fn encode(&self) -> Result<Document> {
                match self {
                    $( AnyEntity::$variant(entity) => entity.encode() ),+
                }
            }
        }
    };
}

any_entity! {
    Agency(Agency),
    AnalysisOutputs(AnalysisOutputs),
    AnalysisSettings(AnalysisSettings),
    Architecture(Architecture),
    Constellation(Constellation),
    DesignSpace(DesignSpace),
    GroundNetwork(GroundNetwork),
    GroundStation(GroundStation),
    Instrument(Instrument),
    LaunchVehicle(LaunchVehicle),
    MissionConcept(MissionConcept),
    MissionObjective(MissionObjective),
    Orbit(Orbit),
    QuantitativeRange(QuantitativeRange),
    QuantitativeValue(QuantitativeValue),
    Region(Region),
    Satellite(Satellite),
    SearchParameters(SearchParameters),
    TradespaceSearch(TradespaceSearch),
}

type Constructor = fn(Document) -> Result<AnyEntity>;

fn construct<E>(doc: Document) -> Result<AnyEntity>
where
    E: Entity + Into<AnyEntity>,
{
    Ok(E::decode(doc)?.into())
}

/// Constructors by `@type`. Every instrument kind maps to [`Instrument`].
static REGISTRY: LazyLock<HashMap<&'static str, Constructor>> = LazyLock::new(|| {
    let mut registry: HashMap<&'static str, Constructor> = HashMap::new();
    registry.insert(Agency::TYPE, construct::<Agency>);
    registry.insert(AnalysisOutputs::TYPE, construct::<AnalysisOutputs>);
    registry.insert(AnalysisSettings::TYPE, construct::<AnalysisSettings>);
    registry.insert(Architecture::TYPE, construct::<Architecture>);
    registry.insert(Constellation::TYPE, construct::<Constellation>);
    registry.insert(DesignSpace::TYPE, construct::<DesignSpace>);
    registry.insert(GroundNetwork::TYPE, construct::<GroundNetwork>);
    registry.insert(GroundStation::TYPE, construct::<GroundStation>);
    registry.insert(LaunchVehicle::TYPE, construct::<LaunchVehicle>);
    registry.insert(MissionConcept::TYPE, construct::<MissionConcept>);
    registry.insert(MissionObjective::TYPE, construct::<MissionObjective>);
    registry.insert(Orbit::TYPE, construct::<Orbit>);
    registry.insert(QuantitativeRange::TYPE, construct::<QuantitativeRange>);
    registry.insert(QuantitativeValue::TYPE, construct::<QuantitativeValue>);
    registry.insert(Region::TYPE, construct::<Region>);
    registry.insert(Satellite::TYPE, construct::<Satellite>);
    registry.insert(SearchParameters::TYPE, construct::<SearchParameters>);
    registry.insert(TradespaceSearch::TYPE, construct::<TradespaceSearch>);
    for kind in instrument_kinds() {
        registry.insert(kind, construct::<Instrument>);
    }
    registry
});

/// Registered `@type` discriminators, sorted.
pub fn registered_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = REGISTRY.keys().copied().collect();
    types.sort_unstable();
    types
}

/// Result of an untyped decode.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Decoded {
    Entity(AnyEntity),
    List(Vec<Decoded>),
    /// A scalar, an untagged object or an object with an unregistered tag
    Document(Document),
}

impl Decoded {
    /// Already decoded; returned as is.
    pub fn decode(self) -> Result<Decoded> {
        Ok(self)
    }

    pub fn encode(&self) -> Result<Document> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn as_entity(&self) -> Option<&AnyEntity> {
        match self {
            Decoded::Entity(entity) => Some(entity),
            _ => None,
        }
    }
}

/// Decodes a document by its `@type`.
///
/// Lists decode element-wise. Scalars, untagged objects and unknown tags
/// are returned unchanged.
pub fn decode(doc: Document) -> Result<Decoded> {
    if let Document::Array(items) = doc {
        return Ok(Decoded::List(
            items.into_iter().map(decode).collect::<Result<_>>()?,
        ));
    }

    match type_of(&doc).and_then(|tag| REGISTRY.get(tag).copied()) {
        Some(constructor) => Ok(Decoded::Entity(constructor(doc)?)),
        None => Ok(Decoded::Document(doc)),
    }
}

/// Parses JSON text and decodes it by `@type`.
pub fn from_json(text: &str) -> Result<Decoded> {
    decode(serde_json::from_str(text)?)
}
