use crate::geojson::Collection;
use crate::geojson::Feature;
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Default file name for exported sketches.
pub const EXPORT_FILE: &str = "updated-data.geojson";

/// The current set of editable features, along with any foreign
/// members of the collection they were imported from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    collection: Collection,
}

impl Sketch {
    pub fn features(&self) -> &[Feature] {
        &self.collection.features
    }
    pub fn len(&self) -> usize {
        self.collection.len()
    }
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
    pub fn add(&mut self, feature: Feature) -> usize {
        self.collection.features.push(feature);
        self.collection.len() - 1
    }
    pub fn remove(&mut self, index: usize) -> Option<Feature> {
        (index < self.len()).then(|| self.collection.features.remove(index))
    }
    pub fn clear(&mut self) {
        self.collection.features.clear();
    }
}

impl Sketch {
    /// Replaces every feature with those parsed from `text`.
    ///
    /// Accepts a FeatureCollection or a lone Feature. On any error the
    /// current features are kept as they were.
    pub fn import(&mut self, text: &str) -> anyhow::Result<usize> {
        let value = serde_json::from_str::<Value>(text).context("malformed JSON")?;
        let collection = match value.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => serde_json::from_value::<Collection>(value)?,
            Some("Feature") => Collection::from(vec![serde_json::from_value::<Feature>(value)?]),
            Some(other) => anyhow::bail!("unsupported GeoJSON type {:?}", other),
            None => anyhow::bail!("missing GeoJSON type"),
        };
        collection.validate()?;
        *self = Self::from(collection);
        log::debug!("[sketch] imported {} features", self.len());
        Ok(self.len())
    }
    /// Serializes the features verbatim as a FeatureCollection.
    pub fn export(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.collection)?)
    }
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut sketch = Self::default();
        sketch
            .import(&text)
            .with_context(|| format!("importing {}", path.display()))?;
        Ok(sketch)
    }
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.export()?)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("[sketch] wrote {} features to {}", self.len(), path.display());
        Ok(())
    }
}

impl From<Collection> for Sketch {
    fn from(collection: Collection) -> Self {
        Self { collection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::Geometry;
    use crate::geojson::Properties;
    use crate::geometry::Coord;

    const DRAWN: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "id": "3f1c",
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [77.1025, 28.7041] }
            },
            {
                "id": "9ab0",
                "type": "Feature",
                "properties": { "name": "lane" },
                "geometry": { "type": "LineString", "coordinates": [[77.1, 28.5], [77.2, 28.6]] }
            },
            {
                "id": "c7d2",
                "type": "Feature",
                "properties": null,
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[77.2, 28.53], [77.25, 28.54], [77.3, 28.55], [77.2, 28.53]]]
                }
            }
        ]
    }"#;

    fn drawn() -> Sketch {
        let mut sketch = Sketch::default();
        sketch.import(DRAWN).unwrap();
        sketch
    }

    #[test]
    fn imports_collection() {
        let sketch = drawn();
        assert_eq!(sketch.len(), 3);
        let kinds = sketch
            .features()
            .iter()
            .map(|f| f.geometry.kind())
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec!["Point", "LineString", "Polygon"]);
        assert_eq!(sketch.features()[1].name(), Some("lane"));
    }

    #[test]
    fn imports_lone_feature() {
        let mut sketch = Sketch::default();
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1,2]}}"#;
        assert_eq!(sketch.import(json).unwrap(), 1);
    }

    #[test]
    fn import_replaces_everything() {
        let mut sketch = drawn();
        sketch
            .import(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
        assert!(sketch.is_empty());
    }

    #[test]
    fn malformed_json_leaves_state_untouched() {
        let mut sketch = drawn();
        let before = sketch.clone();
        assert!(sketch.import("{ not json").is_err());
        assert_eq!(sketch, before);
    }

    #[test]
    fn invalid_geojson_leaves_state_untouched() {
        let mut sketch = drawn();
        let before = sketch.clone();
        for text in [
            r#"[1, 2, 3]"#,
            r#"{"type":"Topology"}"#,
            r#"{"type":"FeatureCollection"}"#,
            r#"{"type":"Feature","geometry":{"type":"Circle","coordinates":[0,0]}}"#,
            r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0]]}}"#,
        ] {
            assert!(sketch.import(text).is_err(), "accepted {}", text);
            assert_eq!(sketch, before);
        }
    }

    #[test]
    fn export_round_trips_ids_and_properties() {
        let sketch = drawn();
        let exported = sketch.export().unwrap();
        let mut copy = Sketch::default();
        copy.import(&exported).unwrap();
        assert_eq!(copy, sketch);
        let value = serde_json::from_str::<Value>(&exported).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["id"], "3f1c");
    }

    #[test]
    fn export_keeps_foreign_members_and_altitude() {
        let text = r#"{
            "type": "FeatureCollection",
            "bbox": [0.0, 0.0, 1.0, 1.0],
            "features": [
                {
                    "type": "Feature",
                    "bbox": [1.0, 2.0, 1.0, 2.0],
                    "properties": { "name": "summit" },
                    "geometry": { "type": "Point", "coordinates": [1.0, 2.0, 30.0] }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "MultiPoint", "coordinates": [[0.5, 0.5], [0.6, 0.6, 12.5]] }
                }
            ]
        }"#;
        let mut sketch = Sketch::default();
        assert_eq!(sketch.import(text).unwrap(), 2);
        let exported = serde_json::from_str::<Value>(&sketch.export().unwrap()).unwrap();
        assert_eq!(exported, serde_json::from_str::<Value>(text).unwrap());
    }

    #[test]
    fn imports_multi_geometries() {
        let mut sketch = Sketch::default();
        let text = r#"{"type":"Feature","properties":{},"geometry":{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}}"#;
        assert_eq!(sketch.import(text).unwrap(), 1);
        assert_eq!(sketch.features()[0].geometry.kind(), "MultiPoint");
    }

    #[test]
    fn add_and_remove() {
        let mut sketch = drawn();
        let index = sketch.add(Feature::new(
            Properties::named("stop", "bus stop"),
            Geometry::Point(Coord::new(77.3, 28.6)),
        ));
        assert_eq!(index, 3);
        assert_eq!(sketch.remove(0).map(|f| f.geometry.kind()), Some("Point"));
        assert_eq!(sketch.len(), 3);
        assert!(sketch.remove(10).is_none());
        sketch.clear();
        assert!(sketch.is_empty());
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!("sketch-{}.geojson", std::process::id()));
        let sketch = drawn();
        sketch.save(&path).unwrap();
        let loaded = Sketch::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, sketch);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(Sketch::load("/nonexistent/sketch.geojson").is_err());
    }
}
