//! Request handling: runs the optimizer and maps every outcome to a status
//! code and JSON body.

use crate::optimizer::RouteOptimizer;
use crate::{Error, Result};

use super::types::*;

/// Successful optimization.
pub const STATUS_OK: u16 = 200;
/// Missing origin or destinations.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Any other failure, including unparseable bodies.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// A status code paired with its serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Maps an error to its status code and public message.
    pub fn from_error(e: &Error) -> Self {
        let status = if e.is_client_error() {
            STATUS_BAD_REQUEST
        } else {
            STATUS_INTERNAL_ERROR
        };
        let body = serde_json::to_string(&ErrorResponse::new(e.public_message()))
            .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, e.public_message()));
        Self { status, body }
    }

    /// Returns `true` for a 200 response.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Runs the optimizer on a typed request and builds the wire response.
pub fn optimize_request(optimizer: &RouteOptimizer, request: RouteRequest) -> Result<RouteResponse> {
    let destinations = request.destinations.unwrap_or_default();
    let waypoints: Vec<_> = destinations
        .iter()
        .enumerate()
        .map(|(k, d)| d.to_waypoint(k))
        .collect();

    let result = optimizer.optimize(request.origin, &waypoints)?;

    let mut slots: Vec<Option<Destination>> = destinations.into_iter().map(Some).collect();
    let route = result
        .order()
        .iter()
        .map(|&k| {
            slots
                .get_mut(k)
                .and_then(Option::take)
                .ok_or_else(|| Error::computation(format!("destination {k} mapped twice")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RouteResponse {
        route,
        total_distance: result.total_distance_meters(),
        total_duration: result.total_duration_seconds(),
    })
}

/// Handles a raw JSON request body, mapping every outcome to a status and body.
///
/// # Examples
///
/// ```
/// use route_optimizer::RouteOptimizer;
/// use route_optimizer::api::handle_optimize_request;
///
/// let optimizer = RouteOptimizer::default();
///
/// let ok = handle_optimize_request(&optimizer, r#"{
///     "origin": {"lat": 0.0, "lng": 0.0},
///     "destinations": [{"id": "a", "name": "A", "placeId": "p", "location": {"lat": 0.0, "lng": 1.0}}]
/// }"#);
/// assert_eq!(ok.status, 200);
///
/// let bad = handle_optimize_request(&optimizer, r#"{"origin": {"lat": 0.0, "lng": 0.0}, "destinations": []}"#);
/// assert_eq!(bad.status, 400);
/// ```
pub fn handle_optimize_request(optimizer: &RouteOptimizer, body: &str) -> ApiResponse {
    let outcome = serde_json::from_str::<RouteRequest>(body)
        .map_err(Error::from)
        .and_then(|request| optimize_request(optimizer, request))
        .and_then(|response| serde_json::to_string(&response).map_err(Error::from));

    match outcome {
        Ok(body) => ApiResponse {
            status: STATUS_OK,
            body,
        },
        Err(e) => {
            // computation failures are already logged by the optimizer
            if let Error::Json(inner) = &e {
                log::error!("optimize request failed: {inner}");
            }
            ApiResponse::from_error(&e)
        }
    }
}
