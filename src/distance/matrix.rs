//! Dense distance matrix.

use crate::models::{GeoPoint, Waypoint};

/// A dense n×n distance matrix in meters, stored in row-major order.
///
/// Built from an origin plus destinations: index 0 is the origin and index
/// `k` is destination `k - 1`. Each unordered pair is computed once and
/// mirrored, so `get(i, j)` and `get(j, i)` are bit-identical.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{GeoPoint, Waypoint};
/// use route_optimizer::distance::DistanceMatrix;
///
/// let origin = GeoPoint::new(0.0, 0.0);
/// let destinations = vec![
///     Waypoint::new("a", GeoPoint::new(0.0, 1.0)),
///     Waypoint::new("b", GeoPoint::new(0.0, 2.0)),
/// ];
/// let dm = DistanceMatrix::from_waypoints(&origin, &destinations);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(1, 2), dm.get(2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a haversine distance matrix over `origin` followed by `points`.
    pub fn from_points(origin: &GeoPoint, points: &[GeoPoint]) -> Self {
        let all: Vec<GeoPoint> = std::iter::once(*origin)
            .chain(points.iter().copied())
            .collect();
        let n = all.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = all[i].distance_to(&all[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes a haversine distance matrix over `origin` followed by the
    /// destinations' locations.
    pub fn from_waypoints(origin: &GeoPoint, destinations: &[Waypoint]) -> Self {
        let points: Vec<GeoPoint> = destinations.iter().map(Waypoint::point).collect();
        Self::from_points(origin, &points)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (origin included).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of destinations, i.e. `size() - 1`.
    pub fn num_destinations(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the first entry that is NaN or infinite, as `(from, to)`.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|d| !d.is_finite())
            .map(|k| (k / self.size, k % self.size))
    }

    /// Returns `true` if every entry is a finite number.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine_distance;

    fn sample_waypoints() -> (GeoPoint, Vec<Waypoint>) {
        let origin = GeoPoint::new(0.0, 0.0);
        let destinations = vec![
            Waypoint::new("a", GeoPoint::new(0.0, 1.0)),
            Waypoint::new("b", GeoPoint::new(0.0, 2.0)),
            Waypoint::new("c", GeoPoint::new(0.0, -1.0)),
        ];
        (origin, destinations)
    }

    #[test]
    fn test_from_waypoints() {
        let (origin, destinations) = sample_waypoints();
        let dm = DistanceMatrix::from_waypoints(&origin, &destinations);
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.num_destinations(), 3);
        let one_degree = haversine_distance(&origin, &destinations[0].point());
        assert_eq!(dm.get(0, 1), one_degree);
        assert!((dm.get(0, 2) - 2.0 * one_degree).abs() < 1e-6);
        assert!((dm.get(2, 3) - 3.0 * one_degree).abs() < 1e-6);
    }

    #[test]
    fn test_zero_diagonal() {
        let (origin, destinations) = sample_waypoints();
        let dm = DistanceMatrix::from_waypoints(&origin, &destinations);
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric_exact() {
        let (origin, destinations) = sample_waypoints();
        let dm = DistanceMatrix::from_waypoints(&origin, &destinations);
        assert!(dm.is_symmetric(0.0));
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j).to_bits(), dm.get(j, i).to_bits());
            }
        }
    }

    #[test]
    fn test_origin_only() {
        let dm = DistanceMatrix::from_points(&GeoPoint::new(10.0, 10.0), &[]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.num_destinations(), 0);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_non_finite_detection() {
        let dm = DistanceMatrix::from_points(
            &GeoPoint::new(0.0, 0.0),
            &[GeoPoint::new(1.0, 1.0), GeoPoint::new(f64::NAN, 0.0)],
        );
        assert!(!dm.is_finite());
        assert_eq!(dm.first_non_finite(), Some((0, 2)));

        let ok = DistanceMatrix::from_points(&GeoPoint::new(0.0, 0.0), &[GeoPoint::new(1.0, 1.0)]);
        assert!(ok.is_finite());
    }
}
