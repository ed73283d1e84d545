//! JSON request/response contract.
//!
//! Maps the optimizer onto the wire shapes callers exchange with it: a
//! camelCase request carrying an origin and destination objects, a response
//! echoing those objects in visiting order, and two error shapes (client
//! error for missing input, opaque server error for everything else).

mod handler;
mod types;

pub use handler::{
    handle_optimize_request, optimize_request, ApiResponse, STATUS_BAD_REQUEST,
    STATUS_INTERNAL_ERROR, STATUS_OK,
};
pub use types::{Destination, ErrorResponse, RouteRequest, RouteResponse};
