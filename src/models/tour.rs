//! Origin-anchored tour over distance-matrix indices.

/// An ordered visiting sequence over matrix indices, bracketed by the origin.
///
/// Index 0 is the origin; indices `1..=n` are destinations. A valid tour over
/// `n` destinations has length `n + 2` (or `[0]` when `n == 0`), starts and
/// ends at 0, and contains every destination exactly once in between.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12.5);
/// assert!(tour.is_valid(2));
/// assert_eq!(tour.interior(), &[2, 1]);
/// assert_eq!(tour.distance(), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    nodes: Vec<usize>,
    distance: f64,
}

impl Tour {
    /// Creates a tour from its node sequence and total length.
    pub fn new(nodes: Vec<usize>, distance: f64) -> Self {
        Self { nodes, distance }
    }

    /// The node sequence, including both origin anchors.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Total length of the tour in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of nodes, including both origin anchors.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Destination indices in visiting order (origin anchors removed).
    pub fn interior(&self) -> &[usize] {
        if self.nodes.len() < 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Returns `true` if this is a valid tour over `n` destinations.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 {
            return self.nodes == [0];
        }
        if self.nodes.len() != n + 2 || self.nodes[0] != 0 || self.nodes[n + 1] != 0 {
            return false;
        }
        let mut seen = vec![false; n + 1];
        for &k in self.interior() {
            if k == 0 || k > n || seen[k] {
                return false;
            }
            seen[k] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_valid() {
        assert!(Tour::new(vec![0, 1, 2, 3, 0], 0.0).is_valid(3));
        assert!(Tour::new(vec![0, 3, 1, 2, 0], 0.0).is_valid(3));
        assert!(Tour::new(vec![0], 0.0).is_valid(0));
    }

    #[test]
    fn test_tour_invalid() {
        // duplicate
        assert!(!Tour::new(vec![0, 1, 1, 0], 0.0).is_valid(2));
        // wrong anchors
        assert!(!Tour::new(vec![1, 0, 2, 0], 0.0).is_valid(2));
        // wrong length
        assert!(!Tour::new(vec![0, 1, 0], 0.0).is_valid(2));
        // out of range
        assert!(!Tour::new(vec![0, 1, 5, 0], 0.0).is_valid(2));
        // origin in the interior
        assert!(!Tour::new(vec![0, 0, 1, 0], 0.0).is_valid(2));
    }

    #[test]
    fn test_interior_trivial() {
        assert!(Tour::new(vec![0], 0.0).interior().is_empty());
        assert_eq!(Tour::new(vec![0, 1, 0], 4.0).interior(), &[1]);
    }

    #[test]
    fn test_len() {
        let tour = Tour::new(vec![0, 2, 1, 0], 3.0);
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_empty());
        assert_eq!(tour.nodes(), &[0, 2, 1, 0]);
    }
}
