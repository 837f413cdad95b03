use entity::{Entity, EntityType, TypeTag};
use ground::GroundNetwork;
use serde::{Deserialize, Serialize};
use space::Constellation;

/// One concrete point of a design space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<Architecture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<Constellation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_network: Option<GroundNetwork>,
}

impl Architecture {
    pub fn new(constellation: Constellation, ground_network: GroundNetwork) -> Self {
        Self {
            constellation: Some(constellation),
            ground_network: Some(ground_network),
            ..Default::default()
        }
    }
}

impl EntityType for Architecture {
    const TYPE: &'static str = "Architecture";
}

impl Entity for Architecture {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(Architecture);

/// Streams constellation × ground network pairs, constellation outer.
///
/// Constellations are pulled lazily; the ground networks are held in memory
/// since every constellation is paired with each of them.
pub struct Architectures<'a> {
    constellations: Box<dyn Iterator<Item = Constellation> + 'a>,
    networks: Vec<GroundNetwork>,
    current: Option<Constellation>,
    next_network: usize,
}

impl<'a> Architectures<'a> {
    pub fn new(
        constellations: Box<dyn Iterator<Item = Constellation> + 'a>,
        networks: Vec<GroundNetwork>,
    ) -> Self {
        Self {
            constellations,
            networks,
            current: None,
            next_network: 0,
        }
    }

    /// Ground networks paired with each constellation.
    pub fn networks(&self) -> &[GroundNetwork] {
        &self.networks
    }
}

impl Iterator for Architectures<'_> {
    type Item = Architecture;

    fn next(&mut self) -> Option<Architecture> {
        if self.networks.is_empty() {
            return None;
        }
        loop {
            if let (Some(constellation), Some(network)) =
                (&self.current, self.networks.get(self.next_network))
            {
                self.next_network += 1;
                return Some(Architecture::new(constellation.clone(), network.clone()));
            }
            self.current = Some(self.constellations.next()?);
            self.next_network = 0;
        }
    }
}
