use entity::{Entity, EntityType, QuantitativeValue, Quantity, TypeTag};
use serde::{Deserialize, Serialize};

/// A point or box bounded by WGS 84 latitudes and longitudes (degrees).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_tag: TypeTag<Region>,
    /// -90 (south) to 90 (north)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Quantity>,
    /// -180 (west) to 180 (east)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Quantity>,
}

impl Region {
    pub fn point(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(Quantity::Value(latitude)),
            longitude: Some(Quantity::Value(longitude)),
            ..Default::default()
        }
    }

    /// The whole globe.
    pub fn global() -> Self {
        Self {
            latitude: Some(QuantitativeValue::new(-90.0, 90.0).into()),
            longitude: Some(QuantitativeValue::new(-180.0, 180.0).into()),
            ..Default::default()
        }
    }
}

impl EntityType for Region {
    const TYPE: &'static str = "Region";
}

impl Entity for Region {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

entity::identity_eq!(Region);
