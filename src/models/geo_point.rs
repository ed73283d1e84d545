//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_distance;

/// A WGS-84 coordinate in decimal degrees.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::GeoPoint;
///
/// let p = GeoPoint::new(52.52, 13.405);
/// assert!(p.is_valid());
/// assert!(!GeoPoint::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point. No range check is performed; see [`GeoPoint::is_valid`].
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite and within their ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to another point in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self, other)
    }
}
