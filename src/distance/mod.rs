//! Great-circle distance and the dense distance matrix.
//!
//! Index 0 of every matrix is the trip origin; indices `1..=n` are the
//! destinations in input order.

mod haversine;
mod matrix;

pub use haversine::{haversine_distance, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
