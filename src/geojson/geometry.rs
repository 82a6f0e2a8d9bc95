use crate::geometry::Coord;
use serde::Deserialize;
use serde::Serialize;

/// Adjacently tagged so it reads as `{"type": "...", "coordinates": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coord),
    LineString(Vec<Coord>),
    /// Outer ring first, then holes. Each ring is closed.
    Polygon(Vec<Vec<Coord>>),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<Vec<Coord>>),
    MultiPolygon(Vec<Vec<Vec<Coord>>>),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::MultiLineString(_) => "MultiLineString",
            Self::MultiPolygon(_) => "MultiPolygon",
        }
    }
    pub fn coords(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        match self {
            Self::Point(c) => Box::new(std::iter::once(c)),
            Self::LineString(line) => Box::new(line.iter()),
            Self::Polygon(rings) => Box::new(rings.iter().flatten()),
            Self::MultiPoint(points) => Box::new(points.iter()),
            Self::MultiLineString(lines) => Box::new(lines.iter().flatten()),
            Self::MultiPolygon(polygons) => Box::new(polygons.iter().flatten().flatten()),
        }
    }
    /// Structural checks serde cannot express.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(c) = self.coords().find(|c| !c.is_finite()) {
            anyhow::bail!("non-finite position {}", c);
        }
        match self {
            Self::Point(_) | Self::MultiPoint(_) => Ok(()),
            Self::LineString(line) => Self::line(line),
            Self::MultiLineString(lines) => lines.iter().try_for_each(|l| Self::line(l)),
            Self::Polygon(rings) => Self::rings(rings),
            Self::MultiPolygon(polygons) => polygons.iter().try_for_each(|p| Self::rings(p)),
        }
    }
    fn line(line: &[Coord]) -> anyhow::Result<()> {
        match line.len() {
            n if n < 2 => Err(anyhow::anyhow!("LineString needs at least 2 positions")),
            _ => Ok(()),
        }
    }
    fn rings(rings: &[Vec<Coord>]) -> anyhow::Result<()> {
        rings.iter().enumerate().try_for_each(|(i, ring)| {
            match (ring.len(), ring.first() == ring.last()) {
                (n, _) if n < 4 => Err(anyhow::anyhow!("ring {} needs at least 4 positions", i)),
                (_, false) => Err(anyhow::anyhow!("ring {} is not closed", i)),
                _ => Ok(()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn point_wire_format() {
        let point = Geometry::Point(Coord::new(77.1, 28.5));
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "Point", "coordinates": [77.1, 28.5] })
        );
    }

    #[test]
    fn polygon_wire_format() {
        let json = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#;
        let polygon = serde_json::from_str::<Geometry>(json).unwrap();
        assert_eq!(polygon.kind(), "Polygon");
        assert_eq!(polygon.coords().count(), 4);
        assert!(polygon.validate().is_ok());
    }

    #[test]
    fn unsupported_kind_is_rejected() {
        let json = r#"{"type":"Circle","coordinates":[0,0]}"#;
        assert!(serde_json::from_str::<Geometry>(json).is_err());
    }

    #[test]
    fn multi_geometries() {
        for (json, kind, count) in [
            (r#"{"type":"MultiPoint","coordinates":[[0,0],[1,1]]}"#, "MultiPoint", 2),
            (
                r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3],[4,4]]]}"#,
                "MultiLineString",
                5,
            ),
            (
                r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]]}"#,
                "MultiPolygon",
                8,
            ),
        ] {
            let geometry = serde_json::from_str::<Geometry>(json).unwrap();
            assert_eq!(geometry.kind(), kind);
            assert_eq!(geometry.coords().count(), count);
            assert!(geometry.validate().is_ok());
        }
    }

    #[test]
    fn multi_geometries_validate_members() {
        let json = r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2]]]}"#;
        assert!(serde_json::from_str::<Geometry>(json).unwrap().validate().is_err());
        let json = r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,1]]]]}"#;
        assert!(serde_json::from_str::<Geometry>(json).unwrap().validate().is_err());
    }

    #[test]
    fn degenerate_line_is_invalid() {
        let line = Geometry::LineString(vec![Coord::random()]);
        assert!(line.validate().is_err());
    }

    #[test]
    fn open_ring_is_invalid() {
        let ring = vec![
            Coord::new(0., 0.),
            Coord::new(1., 0.),
            Coord::new(1., 1.),
            Coord::new(0., 1.),
        ];
        assert!(Geometry::Polygon(vec![ring]).validate().is_err());
    }
}
