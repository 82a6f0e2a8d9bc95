use super::Feature;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum CollectionTag {
    FeatureCollection,
}

/// An ordered list of features. This is the document every endpoint
/// serves and every sketch file holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "type")]
    tag: CollectionTag,
    pub features: Vec<Feature>,
    /// Foreign members such as `bbox`, kept so exports are verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.features.len()
    }
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
    /// First feature carrying the given name.
    pub fn named(&self, name: &str) -> Option<&Feature> {
        self.iter().find(|f| f.name() == Some(name))
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, f)| {
                f.geometry
                    .validate()
                    .map_err(|e| anyhow::anyhow!("feature {}: {}", i, e))
            })
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<Feature>> for Collection {
    fn from(features: Vec<Feature>) -> Self {
        Self {
            tag: CollectionTag::FeatureCollection,
            features,
            extra: Map::new(),
        }
    }
}

impl FromIterator<Feature> for Collection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for Collection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;
    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}
