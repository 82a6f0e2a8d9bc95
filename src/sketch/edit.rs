use super::Sketch;
use crate::geojson::Feature;
use crate::geojson::Geometry;
use crate::geometry::Coord;
use std::str::FromStr;

/// A single change to a sketch, as typed on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Drop a point at `LON,LAT`.
    Point(Coord),
    /// Delete the feature at an index of the sketch as it was before editing.
    Remove(usize),
}

impl Sketch {
    /// Applies a batch of edits all-or-nothing.
    /// Removal indices refer to the sketch before any edit in the batch.
    pub fn apply(&mut self, edits: Vec<Edit>) -> anyhow::Result<()> {
        let mut removals = Vec::new();
        let mut additions = Vec::new();
        for edit in edits {
            match edit {
                Edit::Remove(i) if i >= self.len() => {
                    anyhow::bail!("no feature at index {} (sketch has {})", i, self.len())
                }
                Edit::Remove(i) => removals.push(i),
                Edit::Point(c) => additions.push(Feature::from(Geometry::Point(c))),
            }
        }
        removals.sort_unstable();
        removals.dedup();
        for i in removals.into_iter().rev() {
            self.remove(i);
        }
        for feature in additions {
            self.add(feature);
        }
        Ok(())
    }
}

/// Parses `LON,LAT`.
pub fn parse_point(s: &str) -> anyhow::Result<Coord> {
    match s.split(',').map(str::trim).collect::<Vec<_>>().as_slice() {
        [lon, lat] => {
            let coord = Coord::new(lon.parse()?, lat.parse()?);
            match coord.is_finite() {
                true => Ok(coord),
                false => Err(anyhow::anyhow!("non-finite position {}", s)),
            }
        }
        _ => Err(anyhow::anyhow!("expected LON,LAT, got {:?}", s)),
    }
}

impl FromStr for Edit {
    type Err = anyhow::Error;
    /// `point:LON,LAT` or `remove:INDEX`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("point", rest)) => parse_point(rest).map(Self::Point),
            Some(("remove", rest)) => Ok(Self::Remove(rest.trim().parse()?)),
            _ => Err(anyhow::anyhow!("unknown edit {:?}", s)),
        }
    }
}
