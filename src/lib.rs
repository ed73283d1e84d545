//! # route-optimizer
//!
//! Waypoint visiting-order optimization for a single traveller that starts
//! and ends at a fixed origin. Distances are great-circle (haversine) meters,
//! the initial tour comes from a nearest-neighbor heuristic and is refined
//! with 2-opt local search.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (GeoPoint, Waypoint, Tour, OptimizationResult)
//! - [`distance`]: Haversine distance and the dense distance matrix
//! - [`constructive`]: Nearest-neighbor initial tour
//! - [`local_search`]: 2-opt tour improvement
//! - [`optimizer`]: Orchestrator that validates input and drives the pipeline
//! - [`api`]: JSON request/response contract with status mapping
//! - [`config`]: Environment-driven optimizer configuration
//!
//! ## Example
//!
//! ```
//! use route_optimizer::models::{GeoPoint, Waypoint};
//! use route_optimizer::optimize_route;
//!
//! let origin = GeoPoint::new(0.0, 0.0);
//! let destinations = vec![
//!     Waypoint::new("a", GeoPoint::new(0.0, 1.0)),
//!     Waypoint::new("b", GeoPoint::new(0.0, 2.0)),
//!     Waypoint::new("c", GeoPoint::new(0.0, -1.0)),
//! ];
//!
//! let result = optimize_route(Some(origin), &destinations).unwrap();
//! assert_eq!(result.ordered_waypoints().len(), 3);
//! assert!(result.total_distance_meters() > 0.0);
//! ```

pub mod api;
pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod local_search;
pub mod models;
pub mod optimizer;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result, INTERNAL_ERROR_MESSAGE, INVALID_REQUEST_MESSAGE};
pub use optimizer::{optimize_route, OptimizerConfig, RouteOptimizer};
