//! Haversine great-circle distance.
//!
//! Assumes a spherical Earth of radius [`EARTH_RADIUS_M`]. The intermediate
//! term `a` is clamped to `[0, 1]` before the inverse trigonometric step;
//! rounding can otherwise push it just outside that range for near-identical
//! or near-antipodal points and yield NaN.
//!
//! `sqrt(a)` is evaluated as a hypotenuse of the two half-angle terms, so
//! separations far below a nanometre still give a positive distance. Only
//! coordinate differences in the subnormal range (below about `1e-300`
//! degrees) can round to zero.

use crate::models::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters.
///
/// Symmetric bit-for-bit: `haversine_distance(a, b) == haversine_distance(b, a)`.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::GeoPoint;
/// use route_optimizer::distance::haversine_distance;
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(0.0, 1.0);
/// let d = haversine_distance(&a, &b);
/// assert!((d - 111_194.93).abs() < 0.01);
/// assert_eq!(d, haversine_distance(&b, &a));
/// ```
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    // abs() makes the half-angle sines independent of argument order
    let d_lat = (to.lat - from.lat).abs().to_radians();
    let d_lng = (to.lng - from.lng).abs().to_radians();
    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();

    let cos_product = (from.lat.to_radians().cos() * to.lat.to_radians().cos()).max(0.0);

    // sqrt(a) without squaring the sines, which underflows for tiny separations
    let root_a = sin_lat.hypot(cos_product.sqrt() * sin_lng).clamp(0.0, 1.0);

    EARTH_RADIUS_M * 2.0 * root_a.asin()
}
