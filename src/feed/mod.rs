//! Snapshot publication.
//!
//! A single [`Feed`] task owns the bus and the area and publishes
//! immutable [`Snapshot`]s through watch channels. Any number of
//! [`Snapshots`] handles read the latest one without ever computing.
pub mod feed;
pub use feed::*;

pub mod snapshot;
pub use snapshot::*;

pub mod snapshots;
pub use snapshots::*;
