//! GeoJSON documents.
//!
//! Only the subset this crate produces and edits is modelled:
//! Point, LineString and Polygon geometries inside Features inside a
//! FeatureCollection. Anything else fails to deserialize.
pub mod collection;
pub use collection::*;

pub mod feature;
pub use feature::*;

pub mod geometry;
pub use geometry::*;
