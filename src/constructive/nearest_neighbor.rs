//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the origin, always travel to the
//! nearest unvisited destination, then return to the origin.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in ascending index order and only a strictly
//! smaller distance replaces the current best, so equal-distance ties go to
//! the lower index. Output is fully deterministic.
//!
//! # Complexity
//!
//! O(n²) where n = number of destinations.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs an origin-anchored tour using the nearest-neighbor heuristic.
///
/// With zero destinations the tour is `[0]`; with one it is `[0, 1, 0]` and
/// its length is the round trip `2 × d(0, 1)`.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::constructive::nearest_neighbor;
///
/// // origin, then destinations at 10, 1 and 5 units from it on a line
/// let dm = DistanceMatrix::from_data(4, vec![
///      0.0, 10.0, 1.0, 5.0,
///     10.0,  0.0, 9.0, 5.0,
///      1.0,  9.0, 0.0, 4.0,
///      5.0,  5.0, 4.0, 0.0,
/// ]).unwrap();
///
/// let tour = nearest_neighbor(&dm);
/// assert_eq!(tour.nodes(), &[0, 2, 3, 1, 0]);
/// assert!((tour.distance() - 20.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Tour {
    let n = distances.num_destinations();
    match n {
        0 => return Tour::new(vec![0], 0.0),
        1 => return Tour::new(vec![0, 1, 0], 2.0 * distances.get(0, 1)),
        _ => {}
    }

    let mut visited = vec![false; n + 1];
    visited[0] = true; // origin

    let mut nodes = Vec::with_capacity(n + 2);
    nodes.push(0);
    let mut current = 0;
    let mut total = 0.0;

    for _ in 0..n {
        let mut best: Option<(usize, f64)> = None;
        for k in 1..=n {
            if visited[k] {
                continue;
            }
            let d = distances.get(current, k);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((k, d)),
            }
        }

        // n unvisited destinations exist at the start of every step
        let Some((next, d)) = best else { break };
        visited[next] = true;
        nodes.push(next);
        total += d;
        current = next;
    }

    total += distances.get(current, 0);
    nodes.push(0);

    Tour::new(nodes, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn line_matrix() -> DistanceMatrix {
        // origin at 0, destinations at 1, 2, 3 on a line
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_nn_line_order() {
        let tour = nearest_neighbor(&line_matrix());
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 0]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert!((tour.distance() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_empty() {
        let tour = nearest_neighbor(&DistanceMatrix::new(1));
        assert_eq!(tour.nodes(), &[0]);
        assert_eq!(tour.distance(), 0.0);
        assert!(tour.is_valid(0));
    }

    #[test]
    fn test_nn_single_destination() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 7.5, 7.5, 0.0]).expect("valid");
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.nodes(), &[0, 1, 0]);
        assert_eq!(tour.distance(), 15.0);
    }

    #[test]
    fn test_nn_tie_goes_to_lower_index() {
        // destinations 1 and 2 are both 5 away from the origin
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 5.0, 5.0, //
                5.0, 0.0, 8.0, //
                5.0, 8.0, 0.0,
            ],
        )
        .expect("valid");
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.nodes(), &[0, 1, 2, 0]);
        assert!((tour.distance() - 18.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_all_points_coincide() {
        let p = GeoPoint::new(12.0, 34.0);
        let dm = DistanceMatrix::from_points(&p, &[p, p, p]);
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 0]);
        assert_eq!(tour.distance(), 0.0);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let origin = GeoPoint::new(0.0, 0.0);
        let dm = DistanceMatrix::from_points(
            &origin,
            &[GeoPoint::new(0.0, 10.0), GeoPoint::new(0.0, 1.0)],
        );
        let tour = nearest_neighbor(&dm);
        // destination 2 is much closer to the origin
        assert_eq!(tour.nodes(), &[0, 2, 1, 0]);
        assert!(tour.is_valid(2));
    }
}
