//! HTTP polling endpoints.
//!
//! Read-only routes over the latest published snapshots:
//!
//! - `GET /api/bus`: road, bus and heading indicator
//! - `GET /api/area`: the deforming polygon
//! - `GET /api`: alias of `/api/bus` for older clients
//! - `GET /health`: liveness check
pub mod handlers;
pub mod server;

pub use server::*;
