//! Route optimization pipeline.
//!
//! Validates the request, builds the haversine distance matrix, constructs a
//! nearest-neighbor tour, refines it with 2-opt, and maps matrix indices back
//! to the caller's waypoints. Each call is self-contained; a
//! [`RouteOptimizer`] holds configuration only and can be shared freely.

use std::panic::{self, AssertUnwindSafe};

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::local_search::{two_opt_improve_with, ImprovementStrategy, TwoOptOptions};
use crate::models::{GeoPoint, OptimizationResult, Waypoint};
use crate::{Error, Result};

/// Average travel speed assumed for duration estimates, in km/h.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Optimizer settings.
///
/// # Examples
///
/// ```
/// use route_optimizer::OptimizerConfig;
/// use route_optimizer::local_search::ImprovementStrategy;
///
/// let config = OptimizerConfig::default()
///     .with_speed_kmh(30.0)
///     .with_strategy(ImprovementStrategy::IncrementalDelta)
///     .with_max_sweeps(100);
/// assert_eq!(config.speed_kmh(), 30.0);
/// assert_eq!(config.max_sweeps(), Some(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    speed_kmh: f64,
    strategy: ImprovementStrategy,
    max_sweeps: Option<usize>,
}

impl OptimizerConfig {
    /// Sets the average travel speed used for the duration estimate.
    ///
    /// Must be finite and positive; otherwise optimization fails with a
    /// computation error.
    pub fn with_speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Sets the 2-opt candidate scoring strategy.
    pub fn with_strategy(mut self, strategy: ImprovementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the number of 2-opt sweeps.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = Some(max_sweeps);
        self
    }

    /// Average travel speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// 2-opt candidate scoring strategy.
    pub fn strategy(&self) -> ImprovementStrategy {
        self.strategy
    }

    /// Sweep cap, if any.
    pub fn max_sweeps(&self) -> Option<usize> {
        self.max_sweeps
    }

    fn two_opt_options(&self) -> TwoOptOptions {
        TwoOptOptions {
            strategy: self.strategy,
            max_sweeps: self.max_sweeps,
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            strategy: ImprovementStrategy::default(),
            max_sweeps: None,
        }
    }
}

/// Computes an efficient visiting order for destinations around an origin.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{GeoPoint, Waypoint};
/// use route_optimizer::{Error, RouteOptimizer};
///
/// let optimizer = RouteOptimizer::default();
/// let origin = GeoPoint::new(0.0, 0.0);
///
/// let result = optimizer
///     .optimize(Some(origin), &[Waypoint::new("only", GeoPoint::new(0.0, 1.0))])
///     .unwrap();
/// assert_eq!(result.ordered_waypoints()[0].id(), "only");
///
/// assert!(matches!(optimizer.optimize(Some(origin), &[]), Err(Error::InvalidInput)));
/// assert!(matches!(optimizer.optimize(None, &[]), Err(Error::InvalidInput)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Reorders `destinations` into a short closed tour starting at `origin`.
    ///
    /// Fails with [`Error::InvalidInput`] when the origin is missing or there
    /// are no destinations; nothing is computed in that case. Any failure
    /// during the computation itself, panics included, is reported as
    /// [`Error::Computation`].
    pub fn optimize(
        &self,
        origin: Option<GeoPoint>,
        destinations: &[Waypoint],
    ) -> Result<OptimizationResult> {
        let Some(origin) = origin else {
            return Err(Error::InvalidInput);
        };
        if destinations.is_empty() {
            return Err(Error::InvalidInput);
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.solve(&origin, destinations)))
            .unwrap_or_else(|_| Err(Error::computation("optimizer panicked")));

        result.inspect_err(|e| log::error!("optimizer: {e}"))
    }

    fn solve(&self, origin: &GeoPoint, destinations: &[Waypoint]) -> Result<OptimizationResult> {
        let n = destinations.len();
        if !origin.is_valid() || destinations.iter().any(|w| !w.point().is_valid()) {
            log::warn!("optimizer: coordinates outside lat/lng range in request");
        }

        let distances = DistanceMatrix::from_waypoints(origin, destinations);
        if let Some((i, j)) = distances.first_non_finite() {
            return Err(Error::computation(format!(
                "non-finite distance between nodes {i} and {j}"
            )));
        }
        log::debug!("optimizer: built {0}x{0} distance matrix", distances.size());

        let initial = nearest_neighbor(&distances);
        log::debug!("optimizer: nearest-neighbor tour {:.3} m", initial.distance());

        let outcome = two_opt_improve_with(&distances, &initial, &self.config.two_opt_options());
        let tour = outcome.tour;
        if !tour.is_valid(n) {
            return Err(Error::computation(format!(
                "improved tour is not a permutation: {:?}",
                tour.nodes()
            )));
        }

        let total_distance = tour.distance();
        let total_duration = estimate_duration_seconds(total_distance, self.config.speed_kmh);
        if !total_duration.is_finite() {
            return Err(Error::computation(format!(
                "duration estimate is not finite (speed_kmh={})",
                self.config.speed_kmh
            )));
        }

        let order: Vec<usize> = tour.interior().iter().map(|&k| k - 1).collect();
        let ordered = order.iter().map(|&k| destinations[k].clone()).collect();

        log::debug!(
            "optimizer: {n} destinations, {total_distance:.3} m, {total_duration:.1} s, {} sweeps",
            outcome.sweeps
        );

        Ok(
            OptimizationResult::new(ordered, order, total_distance, total_duration)
                .with_search_stats(initial.distance(), outcome.sweeps),
        )
    }
}

/// Travel time in seconds for `distance_meters` at a constant `speed_kmh`.
///
/// ```
/// use route_optimizer::optimizer::estimate_duration_seconds;
///
/// assert_eq!(estimate_duration_seconds(50_000.0, 50.0), 3600.0);
/// ```
pub fn estimate_duration_seconds(distance_meters: f64, speed_kmh: f64) -> f64 {
    (distance_meters / 1000.0 / speed_kmh) * 3600.0
}

/// Optimizes with the default configuration.
pub fn optimize_route(
    origin: Option<GeoPoint>,
    destinations: &[Waypoint],
) -> Result<OptimizationResult> {
    RouteOptimizer::default().optimize(origin, destinations)
}
