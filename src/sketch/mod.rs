//! Editable GeoJSON feature sets.
//!
//! The file side of the map editor: import a FeatureCollection from text,
//! add or remove points, lines and polygons, and export the result.
pub mod edit;
pub use edit::*;

pub mod sketch;
pub use sketch::*;
