use serde::{Deserialize, Serialize};

use crate::document::{Entity, EntityType, TypeTag};
use crate::enumeration::lenient;

crate::enumeration! {
    /// Kind of organization that designs, provides or operates an asset
    pub enum AgencyType as "agency type" {
        Academic => "ACADEMIC",
        Government => "GOVERNMENT",
        Commercial => "COMMERCIAL",
    }
}

/// An organization responsible for operating a space mission or asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<Agency>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub agency_type: Option<AgencyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
}

impl Agency {
    pub fn of_type(agency_type: AgencyType) -> Self {
        Self {
            agency_type: Some(agency_type),
            ..Default::default()
        }
    }

    /// Acronym, falling back to the full name.
    pub fn short_name(&self) -> Option<&str> {
        self.acronym.as_deref().or(self.name.as_deref())
    }
}

impl EntityType for Agency {
    const TYPE: &'static str = "Agency";
}

impl Entity for Agency {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

crate::identity_eq!(Agency);
