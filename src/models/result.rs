//! Optimization result type.

use super::Waypoint;

/// The reordered destinations together with distance and duration totals.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    ordered_waypoints: Vec<Waypoint>,
    order: Vec<usize>,
    total_distance_meters: f64,
    total_duration_seconds: f64,
    initial_distance_meters: f64,
    sweeps: usize,
}

impl OptimizationResult {
    /// Creates a result. `order` holds zero-based input positions in visiting order.
    pub fn new(
        ordered_waypoints: Vec<Waypoint>,
        order: Vec<usize>,
        total_distance_meters: f64,
        total_duration_seconds: f64,
    ) -> Self {
        Self {
            ordered_waypoints,
            order,
            total_distance_meters,
            total_duration_seconds,
            initial_distance_meters: total_distance_meters,
            sweeps: 0,
        }
    }

    /// Records the nearest-neighbor tour length and the 2-opt sweep count.
    pub fn with_search_stats(mut self, initial_distance_meters: f64, sweeps: usize) -> Self {
        self.initial_distance_meters = initial_distance_meters;
        self.sweeps = sweeps;
        self
    }

    /// Destinations in visiting order (origin excluded).
    pub fn ordered_waypoints(&self) -> &[Waypoint] {
        &self.ordered_waypoints
    }

    /// Zero-based positions into the caller's destination list, in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Length of the closed tour in meters.
    pub fn total_distance_meters(&self) -> f64 {
        self.total_distance_meters
    }

    /// Estimated travel time in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.total_duration_seconds
    }

    /// Length of the nearest-neighbor tour before 2-opt.
    pub fn initial_distance_meters(&self) -> f64 {
        self.initial_distance_meters
    }

    /// Number of 2-opt sweeps performed.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }
}
