use entity::{Agency, AgencyType, CommunicationBand, Entity, EntityType, Quantity, TypeTag, lenient};
use serde::{Deserialize, Serialize};

/// A surface facility providing uplink or downlink services to satellites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundStation {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<GroundStation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
    /// WGS 84 latitude (degrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Quantity>,
    /// WGS 84 longitude (degrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Quantity>,
    /// Height above mean sea level (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub comm_band: Vec<CommunicationBand>,
}

impl GroundStation {
    pub fn agency_type(&self) -> Option<AgencyType> {
        self.agency.as_ref().and_then(|agency| agency.agency_type)
    }

    /// Acronym, falling back to the full name.
    pub fn short_name(&self) -> Option<&str> {
        self.acronym.as_deref().or(self.name.as_deref())
    }
}

impl EntityType for GroundStation {
    const TYPE: &'static str = "GroundStation";
}

impl Entity for GroundStation {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(GroundStation);
