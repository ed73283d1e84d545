//! Domain model types for waypoint routing.
//!
//! Provides the core abstractions: geographic points, destination waypoints,
//! origin-anchored tours over matrix indices, and the optimization result
//! handed back to callers.

mod geo_point;
mod result;
mod tour;
mod waypoint;

pub use geo_point::GeoPoint;
pub use result::OptimizationResult;
pub use tour::Tour;
pub use waypoint::Waypoint;
