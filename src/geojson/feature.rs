use super::Geometry;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum FeatureTag {
    Feature,
}

/// Free-form properties with the three keys this crate writes pulled out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Properties {
    pub fn named(name: &str, description: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }
    pub fn stamped(self, timestamp: String) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub properties: Properties,
    pub geometry: Geometry,
    /// Foreign members such as `bbox`, kept so exports are verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feature {
    pub fn new(properties: Properties, geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            properties,
            geometry,
            extra: Map::new(),
        }
    }
    pub fn name(&self) -> Option<&str> {
        self.properties.name.as_deref()
    }
}

/// GeoJSON allows `"properties": null`.
fn nullable<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Properties>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<Geometry> for Feature {
    fn from(geometry: Geometry) -> Self {
        Self::new(Properties::default(), geometry)
    }
}
