use crate::geojson::Collection;
use bytes::Bytes;

/// Which generator a snapshot came from.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Kind {
    Bus,
    Area,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bus => write!(f, "bus"),
            Self::Area => write!(f, "area"),
        }
    }
}

/// A FeatureCollection frozen together with its JSON body,
/// so readers serve bytes without re-serializing.
#[derive(Debug, Clone)]
pub struct Snapshot {
    collection: Collection,
    body: Bytes,
}

impl Snapshot {
    pub fn collection(&self) -> &Collection {
        &self.collection
    }
    pub fn body(&self) -> Bytes {
        self.body.clone()
    }
}

impl TryFrom<Collection> for Snapshot {
    type Error = anyhow::Error;
    fn try_from(collection: Collection) -> Result<Self, Self::Error> {
        let body = Bytes::from(serde_json::to_vec(&collection)?);
        Ok(Self { collection, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Bus;

    #[test]
    fn body_matches_collection() {
        let collection = Bus::default().snapshot(crate::timestamp());
        let snapshot = Snapshot::try_from(collection.clone()).unwrap();
        let parsed = serde_json::from_slice::<Collection>(&snapshot.body()).unwrap();
        assert_eq!(&parsed, snapshot.collection());
        assert_eq!(parsed, collection);
        assert_eq!(snapshot.body(), serde_json::to_vec(&parsed).unwrap());
    }

    #[test]
    fn area_body_survives_reparse() {
        let mut area = crate::area::Deformer::default();
        for _ in 0..50 {
            let snapshot = Snapshot::try_from(area.snapshot(crate::timestamp())).unwrap();
            let parsed = serde_json::from_slice::<Collection>(&snapshot.body()).unwrap();
            assert_eq!(&parsed, snapshot.collection());
        }
    }
}
